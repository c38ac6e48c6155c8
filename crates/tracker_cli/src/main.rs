//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tracker_core` linkage.
//! - Print the sample board deterministically for quick local checks.

use tracker_core::{ActivityBoard, ActivityStatus, FilterSpec, EMPTY_PROJECTION_MESSAGE};

fn main() {
    println!("tracker_core ping={}", tracker_core::ping());
    println!("tracker_core version={}", tracker_core::core_version());

    let mut board = ActivityBoard::with_samples();
    print_board("all", &board);

    board.on_filter_change(FilterSpec::default().with_status(Some(ActivityStatus::Pending)));
    print_board("pending", &board);
}

fn print_board(label: &str, board: &ActivityBoard) {
    println!("[{label}]");
    if board.visible().is_empty() {
        println!("  {EMPTY_PROJECTION_MESSAGE}");
    }
    for activity in board.visible() {
        println!(
            "  {:<9} {:<18} {}",
            activity.status.label(),
            activity.title,
            activity.display_timestamp()
        );
    }
}
