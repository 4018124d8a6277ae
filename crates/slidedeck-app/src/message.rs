//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for deferred effects (announcement removal, scroll reset)
    Tick,

    /// Quit the presenter (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Transition Requests
    // ─────────────────────────────────────────────────────────
    NextSlide,
    PreviousSlide,
    /// Go to a 1-based slide; out-of-range requests are ignored
    GotoSlide(usize),
    /// Go to a slide given as text; anything but an in-range integer is ignored
    GotoSlideRaw(String),
    FirstSlide,
    LastSlide,

    // ─────────────────────────────────────────────────────────
    // Pointer Messages (coordinates in pixels)
    // ─────────────────────────────────────────────────────────
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    /// An indicator was clicked (1-based)
    IndicatorClicked(usize),

    // ─────────────────────────────────────────────────────────
    // Indicator Focus
    // ─────────────────────────────────────────────────────────
    FocusNextIndicator,
    FocusPreviousIndicator,
    ClearFocus,
    /// Enter/Space on the focused indicator
    ActivateFocusedIndicator,

    // ─────────────────────────────────────────────────────────
    // Slide Content Scrolling
    // ─────────────────────────────────────────────────────────
    ScrollContentUp(u16),
    ScrollContentDown(u16),
    /// Rows available to the slide body after layout
    ContentViewport(u16),

    // ─────────────────────────────────────────────────────────
    // Presentation Mode
    // ─────────────────────────────────────────────────────────
    EnterPresentationMode,
    ExitPresentationMode,
    TogglePresentationMode,

    // ─────────────────────────────────────────────────────────
    // Auto-advance
    // ─────────────────────────────────────────────────────────
    StartAutoAdvance,
    StopAutoAdvance,
    ToggleAutoAdvance,
    /// Periodic timer fired
    AutoAdvanceTick,

    // ─────────────────────────────────────────────────────────
    // Fragment Location
    // ─────────────────────────────────────────────────────────
    OpenJumpPrompt,
    JumpInput { text: String },
    SubmitJump,
    CancelJump,
    /// Navigate to a fragment, creating a history entry
    NavigateFragment(String),
    HistoryBack,
    HistoryForward,
    /// The current history entry changed through navigation; re-read it
    FragmentNavigated,
}

impl Message {
    /// Messages that count as the user interacting with the deck, which
    /// cancels a running auto-advance timer.
    pub fn is_user_interaction(&self) -> bool {
        matches!(
            self,
            Message::Key(_) | Message::PointerDown { .. } | Message::IndicatorClicked(_)
        )
    }
}
