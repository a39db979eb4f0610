//! Plain-text rendering of the list view.
//!
//! The renderer writes to any `io::Write`, so the terminal front-end passes
//! stdout and tests pass a `Vec<u8>`.
//!
//! # Example
//!
//! ```rust
//! use spotfinder::ui::{render_list, ListViewModel};
//!
//! let mut out = Vec::new();
//! render_list(&mut out, &ListViewModel::from_locations(&[]))?;
//! assert!(String::from_utf8(out).unwrap().contains("No locations stored"));
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::ui::viewmodel::{ListViewModel, ADDRESS_COLUMN_WIDTH, NAME_COLUMN_WIDTH};
use std::io::{self, Write};

/// Renders the list as a numbered NAME / ADDRESS / COORDINATES table.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn render_list(out: &mut impl Write, vm: &ListViewModel) -> io::Result<()> {
    writeln!(out, "{}", vm.header.title)?;

    if let Some(empty) = &vm.empty_state {
        writeln!(out, "  {}", empty.message)?;
        return Ok(());
    }

    writeln!(
        out,
        "{:>4}  {:<name$}{:<addr$}COORDINATES",
        "#",
        "NAME",
        "ADDRESS",
        name = NAME_COLUMN_WIDTH,
        addr = ADDRESS_COLUMN_WIDTH,
    )?;

    for row in &vm.rows {
        writeln!(
            out,
            "{:>4}  {:<name$}{:<addr$}{}",
            row.index,
            row.name,
            row.address,
            row.coordinates,
            name = NAME_COLUMN_WIDTH,
            addr = ADDRESS_COLUMN_WIDTH,
        )?;
    }

    Ok(())
}
