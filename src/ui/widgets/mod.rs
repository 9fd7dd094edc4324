// SPDX-License-Identifier: MPL-2.0
pub mod backdrop;
pub mod scroll_lock;

pub use backdrop::backdrop;
pub use scroll_lock::scroll_lock;
