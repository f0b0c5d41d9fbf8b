/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod aws;
pub mod client;
pub mod cloudflare;
pub mod config;
pub mod digitalocean;
pub mod errors;
pub mod filter;
pub mod icloud;
pub mod ip_version;
pub mod json;
pub mod provider;
pub mod record;
pub mod render;
pub mod rows;
