use super::aggregate::Country;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Первичный ключ сопоставления: NFD, без диакритики, без учёта регистра.
///
/// "Åland Islands" -> "aland islands", "Côte d'Ivoire" -> "cote d'ivoire"
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Сравнение названий с учётом локали (не по байтам/кодовым точкам).
///
/// При равенстве первичных ключей порядок определяется исходной строкой,
/// так что различные названия никогда не считаются равными.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Возвращает новый список, упорядоченный по названию.
///
/// Сортировка стабильная в обоих направлениях: одинаковые названия
/// сохраняют взаимный порядок входа.
pub fn sort_by_name(list: &[Country], ascending: bool) -> Vec<Country> {
    let mut keyed: Vec<(String, &Country)> = list
        .iter()
        .map(|c| (collation_key(&c.name), c))
        .collect();

    keyed.sort_by(|(ka, a), (kb, b)| {
        let cmp = ka.cmp(kb).then_with(|| a.name.cmp(&b.name));
        if ascending { cmp } else { cmp.reverse() }
    });

    keyed.into_iter().map(|(_, c)| c.clone()).collect()
}
