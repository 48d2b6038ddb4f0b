pub(crate) mod config;
pub(crate) mod controller;
pub(crate) mod items;
pub(crate) mod layout;
pub(crate) mod plan;
pub(crate) mod state;
