//! Конфигурация приложения (задаётся при сборке)
//!
//! Адрес API можно переопределить переменной окружения `COUNTRIES_API_URL`
//! во время `trunk build`.

/// Базовый адрес API стран без query-параметров
pub const DEFAULT_COUNTRIES_API_URL: &str = "https://restcountries.com/v2/all";

/// Поля, запрашиваемые у API
pub const COUNTRY_FIELDS: [&str; 3] = ["name", "region", "area"];

/// Стран на одной странице таблицы
pub const PAGE_SIZE: usize = 10;

/// Сколько раз пробуем загрузить список до перехода в состояние ошибки
pub const FETCH_ATTEMPTS: u32 = 3;

pub const RETRY_DELAY_MS: u32 = 500;

pub fn countries_api_url() -> &'static str {
    option_env!("COUNTRIES_API_URL").unwrap_or(DEFAULT_COUNTRIES_API_URL)
}

/// Полный URL запроса: `<base>?fields=name,region,area`
pub fn countries_request_url(base: &str) -> String {
    let fields = COUNTRY_FIELDS
        .iter()
        .map(|f| urlencoding::encode(f).into_owned())
        .collect::<Vec<_>>()
        .join(",");
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}fields={}", base, separator, fields)
}
