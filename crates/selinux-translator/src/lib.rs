//! Off-host SELinux label handling for cluster controllers.
//!
//! Controllers running in the cluster control plane cannot read the SELinux
//! defaults (`/etc/selinux/*`) of the worker nodes that will actually run a
//! workload, so they only ever see the label fields users filled in
//! explicitly. This crate answers the one question such a controller needs
//! answered anyway: given two partially specified labels, could assigning
//! both to the same shared volume cause a real conflict once the labels are
//! fully resolved on a node?
//!
//! # Usage
//!
//! ```
//! use k8s_openapi::api::core::v1::SELinuxOptions;
//! use selinux_translator::{ControllerSELinuxTranslator, SELinuxLabelTranslator};
//!
//! let translator = ControllerSELinuxTranslator;
//!
//! let opts = SELinuxOptions {
//!     level: Some("s0:c1,c2".to_string()),
//!     ..Default::default()
//! };
//! let label = translator.selinux_options_to_file_label(Some(&opts));
//! assert_eq!(label, ":::s0:c1,c2");
//!
//! // A node may expand the unspecified fields to match the full label,
//! // so the two do not conflict.
//! assert!(!translator.conflicts(&label, "system_u:system_r:container_t:s0:c1,c2"));
//!
//! // Two explicit, differing levels can never resolve to the same label.
//! assert!(translator.conflicts(&label, ":::s0:c98,c99"));
//! ```
//!
//! # Architecture
//!
//! - [`SELinuxLabelTranslator`] trait defines the label encode/compare seam
//! - [`ControllerSELinuxTranslator`] implements it without consulting any
//!   host state, flagging a conflict only on positive evidence of one

#![warn(clippy::pedantic)]

pub mod translator;

pub use translator::{ControllerSELinuxTranslator, SELinuxLabelTranslator};
