pub mod api;
pub mod content;
pub mod content_store;
pub mod web;
