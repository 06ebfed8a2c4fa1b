//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions are the boundary between pure state transitions and effectful
//! Zellij API calls (hiding the pane, arming the redirect timer, launching
//! the enquiry composer); the shim in `main.rs` executes them in order.

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly quits (pressing 'q' on the browse
    /// screen).
    CloseFocus,

    /// Arms the one-shot timer that returns the user to the browse screen
    /// after a successful submission.
    ///
    /// The timer has no cancellation path: once armed it always fires and
    /// the resulting event performs the navigation.
    StartRedirectTimer {
        /// Delay before the redirect fires, in seconds.
        seconds: f64,
    },

    /// Opens the user's mail client with a prefilled enquiry about the
    /// selected item.
    OpenEnquiry {
        /// Complete `mailto:` URI with encoded subject and body.
        mailto: String,
    },
}
