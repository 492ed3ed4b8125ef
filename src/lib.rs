// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Animation math: casts between count/float domains are intentional,
// and comparisons against exact sentinel values (0.0, 1.0) are deliberate
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
// Pedantic/nursery allowances
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::use_self)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::redundant_pub_crate)]

//! Fisheye magnification and layout animation core for taskbar-style docks.
//!
//! Dockwave computes the per-frame geometry of a dock whose icons magnify
//! under the pointer and displace their neighbors, the way a macOS-style
//! dock does. The crate owns only the math: callers feed it icon snapshots
//! and pointer positions, and it hands back per-icon positions and scales
//! for a rendering adapter to apply.
//!
//! # Key entry points
//!
//! - [`magnify::compute_targets`] - pure target computation for one tick
//! - [`integrate::integrate_row`] - damped blending of current poses toward
//!   targets
//! - [`driver::AnimationDriver`] - the tick/quiet-period state machine tying
//!   the two together
//! - [`options::Options`] - runtime configuration with TOML preset support
//!
//! # Architecture
//!
//! Everything is single-threaded and cooperative. The driver does not own a
//! timer; the host calls [`driver::AnimationDriver::poll`] from whatever
//! frame or timeout source it has, passing the current instant, and the
//! driver enforces its own tick cadence and idle debounce. The
//! magnification model and the frame integrator are pure functions over
//! plain data and can be exercised from tests with no clock at all.

pub mod driver;
pub mod error;
pub mod geometry;
pub mod icon;
pub mod integrate;
pub mod magnify;
pub mod options;
