//! Hand-curated label to glyph entries.
//!
//! Conventions:
//! - arrows for direction keys
//! - `|…|` around a key held with Left Ctrl
//! - `←X` for delete-like actions, `←|` for Return
//! - `_` for the otherwise invisible space

/// Label and glyph pairs making up the standard glyph table.
pub(super) const GLYPH_ENTRIES: &[(&str, &str)] = &[
    ("<Backspace>", "←X"),
    ("<Left Ctrl><Backspace></Left Ctrl>", "|←X|"),
    ("<UpArrow>", "↑"),
    ("<PageUp>", "PG↑"),
    ("<RightArrow>", "→"),
    ("<DownArrow>", "↓"),
    ("<PageDown>", "PG↓"),
    ("<LeftArrow>", "←"),
    ("<Left Ctrl><UpArrow></Left Ctrl>", "|↑|"),
    ("<Left Ctrl><RightArrow></Left Ctrl>", "|→|"),
    ("<Left Ctrl><DownArrow></Left Ctrl>", "|↓|"),
    ("<Left Ctrl><LeftArrow></Left Ctrl>", "|←|"),
    ("<Return>", "←|"),
    ("<PrintScreen>", "PSC"),
    ("<Delete>", "DEL"),
    ("<Escape>", "ESC"),
    ("<Home>", "HME"),
    ("<Insert>", "INS"),
    ("<End>", "END"),
    ("<F1>", "F1"),
    ("<F2>", "F2"),
    ("<F3>", "F3"),
    ("<F4>", "F4"),
    ("<F5>", "F5"),
    ("<F6>", "F6"),
    ("<F7>", "F7"),
    ("<F8>", "F8"),
    ("<F9>", "F9"),
    ("<F10>", "F10"),
    ("<F11>", "F11"),
    ("<F12>", "F12"),
    ("<Tab>", "TAB"),
    ("<CapsLock>", "CAP"),
    ("<NumLock>", "NUM"),
    (" ", "_"),
    ("<Left Ctrl>c</Left Ctrl>", "|c|"),
    ("<Left Ctrl>v</Left Ctrl>", "|v|"),
    ("<Left Ctrl>x</Left Ctrl>", "|x|"),
    ("<Left Ctrl>z</Left Ctrl>", "|z|"),
    ("<Left Ctrl>a</Left Ctrl>", "|a|"),
    ("<Left Ctrl>b</Left Ctrl>", "|b|"),
    ("<Left Ctrl>f</Left Ctrl>", "|f|"),
    // Word-delete macro: Ctrl+Left then Left
    (
        "<!--  --><Left Ctrl><LeftArrow></Left Ctrl><LeftArrow>",
        "<!->",
    ),
];
