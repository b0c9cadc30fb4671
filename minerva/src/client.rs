pub(crate) mod base;
mod configuration;
mod conversion;
mod files;
mod maps;
mod projects;
pub(crate) mod session;
