/// Cursor names used by toolkits (Qt's shape names).
pub const QT_CURSORS: &[&str] = &[
    "left_ptr",
    "up_arrow",
    "cross",
    "wait",
    "left_ptr_watch",
    "ibeam",
    "size_ver",
    "size_hor",
    "size_bdiag",
    "size_fdiag",
    "size_all",
    "split_v",
    "split_h",
    "pointing_hand",
    "openhand",
    "closedhand",
    "forbidden",
    "whats_this",
    "copy",
    "move",
    "link",
];

/// The X core cursor font names, still requested by older applications.
pub const X_CORE_CURSORS: &[&str] = &[
    "X_cursor",
    "right_ptr",
    "hand1",
    "hand2",
    "watch",
    "xterm",
    "crosshair",
    "left_ptr_watch",
    "center_ptr",
    "sb_h_double_arrow",
    "sb_v_double_arrow",
    "fleur",
    "top_left_corner",
    "top_side",
    "top_right_corner",
    "right_side",
    "bottom_right_corner",
    "bottom_side",
    "bottom_left_corner",
    "left_side",
    "question_arrow",
    "pirate",
];

/// Every cursor that gets reloaded when the theme changes: the toolkit
/// names followed by the X core names.
///
/// `left_ptr_watch` is in both lists, and is yielded twice.
pub fn all() -> impl Iterator<Item = &'static str> {
    QT_CURSORS.iter().chain(X_CORE_CURSORS).copied()
}
