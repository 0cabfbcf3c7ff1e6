use super::aggregate::Country;

/// Площадь Литвы, км². Порог фильтра "меньше Литвы".
///
/// В разных версиях интерфейса встречалось 65 200; каноническим значением
/// принято 65 300.
pub const LITHUANIA_AREA_KM2: f64 = 65_300.0;

/// Регион для фильтра "страны Океании" (точное совпадение с учётом регистра)
pub const OCEANIA_REGION: &str = "Oceania";

/// Предикаты фиксированного каталога фильтров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryFilter {
    SmallerThanLithuania,
    InOceania,
}

impl CountryFilter {
    /// Ключ предиката (`FilterDescriptor::name`)
    pub fn key(&self) -> &'static str {
        match self {
            CountryFilter::SmallerThanLithuania => "SmallerThanLithuania",
            CountryFilter::InOceania => "InOceania",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "SmallerThanLithuania" => Some(CountryFilter::SmallerThanLithuania),
            "InOceania" => Some(CountryFilter::InOceania),
            _ => None,
        }
    }

    pub fn matches(&self, country: &Country) -> bool {
        match self {
            CountryFilter::SmallerThanLithuania => country.area < LITHUANIA_AREA_KM2,
            CountryFilter::InOceania => country.region == OCEANIA_REGION,
        }
    }
}

/// Описание фильтра для UI (чекбокс в панели фильтров)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDescriptor {
    pub id: &'static str,
    /// Ключ предиката, см. [`CountryFilter::key`]
    pub name: &'static str,
    pub display_name: &'static str,
}

impl FilterDescriptor {
    pub fn filter(&self) -> Option<CountryFilter> {
        CountryFilter::from_key(self.name)
    }

    pub fn by_id(id: &str) -> Option<&'static FilterDescriptor> {
        FILTER_CATALOG.iter().find(|d| d.id == id)
    }

    pub fn by_name(name: &str) -> Option<&'static FilterDescriptor> {
        FILTER_CATALOG.iter().find(|d| d.name == name)
    }
}

pub static FILTER_CATALOG: [FilterDescriptor; 2] = [
    FilterDescriptor {
        id: "filter-smaller-than-lithuania",
        name: "SmallerThanLithuania",
        display_name: "Smaller than Lithuania",
    },
    FilterDescriptor {
        id: "filter-in-oceania",
        name: "InOceania",
        display_name: "Countries in Oceania",
    },
];

/// Применяет активные фильтры (логическое И) к исходному списку.
///
/// Всегда работает от переданного полного списка и не изменяет его.
/// Неизвестные ключи игнорируются; пустой набор возвращает копию списка.
pub fn apply_filters<S: AsRef<str>>(original: &[Country], active: &[S]) -> Vec<Country> {
    let predicates: Vec<CountryFilter> = active
        .iter()
        .filter_map(|key| CountryFilter::from_key(key.as_ref()))
        .collect();

    original
        .iter()
        .filter(|country| predicates.iter().all(|p| p.matches(country)))
        .cloned()
        .collect()
}
