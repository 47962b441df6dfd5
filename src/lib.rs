// src/lib.rs
//! Headless renderer for single-page HTML resumes.
//!
//! A resume page carries its data as a JSON payload embedded in the document
//! (`#resume-config`). This crate parses the page, fills its target regions
//! from the payload, then attaches the interaction behaviors (scroll reveal,
//! hover effects, print button, keyboard shortcuts) as explicit event
//! subscriptions that can be driven with synthetic events.
//!
//! The usual entry point is [`renderer::boot`]:
//!
//! ```
//! use cv_page::{boot, Page, Runtime};
//!
//! let page = Page::parse(cv_page::template::DEFAULT_PAGE);
//! let mut rt = Runtime::new(page);
//! let outcome = boot(&mut rt);
//! assert!(outcome.is_rendered());
//! let html = rt.page.to_html();
//! # assert!(html.contains("Alex Chen"));
//! ```

pub mod cli;
pub mod config;
pub mod enhance;
pub mod environment;
pub mod error;
pub mod page;
pub mod render;
pub mod renderer;
pub mod runtime;
pub mod template;

pub use config::{load_embedded, ResumeConfig, CONFIG_ELEMENT_ID};
pub use error::RenderError;
pub use page::Page;
pub use renderer::{boot, BootOutcome};
pub use runtime::{Binding, Dispatch, Event, EventKind, HostCommand, Runtime, Target};
