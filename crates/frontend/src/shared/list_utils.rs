//! Утилиты для заголовков таблиц со списками

/// Индикатор направления сортировки для заголовка колонки
pub fn get_sort_indicator(ascending: bool) -> &'static str {
    if ascending { " ▲" } else { " ▼" }
}

/// CSS-класс индикатора сортировки
pub fn get_sort_class(ascending: bool) -> &'static str {
    if ascending {
        "table__sort-indicator table__sort-indicator--asc"
    } else {
        "table__sort-indicator table__sort-indicator--desc"
    }
}
