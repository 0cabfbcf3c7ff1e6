//! Расчёт страниц для клиентской пагинации
//!
//! Страницы нумеруются с 1. Запросы за пределами диапазона зажимаются
//! в `[1, page_count]`, поэтому срез всегда валиден.

use std::ops::Range;

/// Окно одной страницы списка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Номер страницы после зажатия (с 1)
    pub page: usize,
    pub page_count: usize,
    pub first_index: usize,
    pub last_index_exclusive: usize,
}

impl PageWindow {
    pub fn range(&self) -> Range<usize> {
        self.first_index..self.last_index_exclusive
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    pub fn page_numbers(&self) -> Range<usize> {
        1..self.page_count + 1
    }
}

/// Количество страниц; пустой список всё равно занимает одну страницу
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_items.div_ceil(page_size).max(1)
}

pub fn clamp_page(total_items: usize, page_size: usize, page: usize) -> usize {
    page.clamp(1, page_count(total_items, page_size))
}

pub fn paginate(total_items: usize, page_size: usize, page: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let page_count = page_count(total_items, page_size);
    let page = page.clamp(1, page_count);

    let first_index = ((page - 1) * page_size).min(total_items);
    let last_index_exclusive = (first_index + page_size).min(total_items);

    PageWindow {
        page,
        page_count,
        first_index,
        last_index_exclusive,
    }
}
