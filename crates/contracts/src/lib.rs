//! Доменные типы и чистая логика обработки списка стран.
//!
//! Крейт не зависит от браузера и тестируется нативно; фронтенд
//! использует его для нормализации, фильтрации, сортировки и пагинации.

pub mod domain;
pub mod shared;
