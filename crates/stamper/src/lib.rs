//! Stamp records with the user who created and last updated them.
//!
//! The persistence layer calls [`StampObserver::before_validation`] (or a bare
//! [`Stamper`]) once per save, before validation. The acting user is looked
//! up on the request context through the configured accessor and written into
//! the configured creator/updater fields:
//!
//! ```
//! use std::sync::Arc;
//!
//! use serde_json::json;
//! use userstamp::{StampObserver, StampRegistry};
//! use userstamp_core::{JsonRecord, RequestContext};
//!
//! let observer = StampObserver::builder()
//!     .registry(Arc::new(StampRegistry::new()))
//!     .observe::<JsonRecord>()
//!     .build();
//!
//! let mut record = JsonRecord::new(["body", "creator", "updater"]);
//! record.set("body", json!("first!"));
//! let ctx = RequestContext::new().with_actor("current_user", json!(220));
//!
//! observer.before_validation(&mut record, &ctx);
//! assert_eq!(record.get("creator"), Some(&json!(220)));
//! assert_eq!(record.get("updater"), Some(&json!(220)));
//! ```

pub mod observer;
pub mod resolve;
pub mod stamper;

pub use observer::{StampObserver, StampObserverBuilder, StampedType};
pub use resolve::resolve_actor;
pub use stamper::{StampOutcome, Stamper};
pub use userstamp_core::{ActorContext, StampConfig, StampRegistry, Stampable};
