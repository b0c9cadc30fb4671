//! Client library for the REST API of [MINERVA](https://minerva.pages.uni.lu),
//! a repository of molecular pathway maps.
//!
//! ```no_run
//! use minerva::{Format, MapDownload, MinervaClient};
//! use minerva::types::{BaseUrl, MapId, Username};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let url = BaseUrl::try_from("https://pdmap.uni.lu/minerva/api/")?;
//! let mut client = MinervaClient::new(url)?;
//! client.log_in(&Username::new("anonymous".to_string()), "").await?;
//! let project = client.project("pd_map_spring_18").await?;
//! let maps = client.maps(&project).await?;
//! let sbml = client
//!     .download_map(&maps[0], None, &MapDownload::new(Format::Sbml), None)
//!     .await?;
//! client.log_out().await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod download;
pub mod errors;
pub mod formats;
pub mod identity;
pub mod models;
mod requests;
pub mod schema;
pub mod types;
pub mod urls;

pub use client::base::{MinervaClient, MinervaClientBuilder};
pub use client::session::Credential;
pub use formats::{DownloadAction, Format};
pub use identity::{Ref, Target};
pub use requests::MapDownload;
