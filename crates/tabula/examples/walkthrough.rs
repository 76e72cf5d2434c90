//! Tabula Model Walkthrough
//!
//! Exercises the row state engine end to end:
//! - Row lifecycle and refresh carry-over
//! - Selection/expansion toggles and the derived counters
//! - Disabled and style overlays
//! - Keyboard focus traversal with wraparound
//! - Signals and watch projections
//!
//! Run with: cargo run -p tabula --example walkthrough

use tabula::model::{CheckState, FocusDirection, RowStateModel};

/// Per-row visual override used by the demo table.
#[derive(Debug, Clone, Default, PartialEq)]
struct Highlight(Option<&'static str>);

fn main() {
    tracing_subscriber::fmt::init();

    let mut table: RowStateModel<Highlight> = RowStateModel::new();

    // Subscribe the way a view would: granular signals for cheap widgets,
    // a watch projection for the selected-count footer.
    table.signals().selection_changed.connect(|&count| {
        println!("selection_changed -> {count}");
    });
    table.signals().focus_changed.connect(|(new, old)| {
        println!("focus_changed    -> {old:?} => {new:?}");
    });
    let footer = table.watch(
        |snapshot| (snapshot.number_selected, snapshot.len()),
        |&(selected, total)| {
            println!("footer           -> {selected} of {total} selected");
        },
    );

    println!("-- initial page load");
    table.set_rows(["order-1", "order-2", "order-3", "order-4"]);

    println!("-- user ticks two rows");
    table.toggle_selected("order-2");
    table.toggle_selected("order-4");
    println!(
        "header checkbox: {:?} (partially checked: {})",
        table.select_check_state(),
        table.select_check_state() == CheckState::PartiallyChecked,
    );

    println!("-- header checkbox resolves indeterminate to all");
    table.toggle_all();

    println!("-- background refetch drops order-3, selection survives");
    table.set_rows(["order-1", "order-2", "order-4"]);
    println!("selected after refresh: {:?}", table.selected_ids());

    println!("-- placeholder row is disabled, error row is highlighted");
    table.set_disabled_rows(["order-1"]);
    table.set_row_styles(["order-2"], Highlight(Some("error")), true);

    println!("-- keyboard walk, wrapping at both ends");
    table.set_focus(FocusDirection::Down); // order-1
    table.set_focus(FocusDirection::Up); // wraps to order-4
    table.set_focus(FocusDirection::Down); // wraps to order-1
    println!("focused: {:?}", table.focused_id());

    table.unwatch(footer);
    println!("-- done");
}
