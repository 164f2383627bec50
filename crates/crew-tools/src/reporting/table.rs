//! Plain-text table rendering for sample rows.

/// Placeholder shown for missing cells.
pub const MISSING_CELL: &str = "null";

/// Render a header and rows as right-aligned columns separated by two spaces.
///
/// Rows shorter than the header are padded with [`MISSING_CELL`].
pub fn render_table(header: &[String], rows: &[Vec<Option<String>>]) -> String {
    if rows.is_empty() {
        return format!("{}\n(no rows)", header.join("  "));
    }

    let cell = |row: &[Option<String>], i: usize| -> String {
        row.get(i)
            .and_then(|c| c.clone())
            .unwrap_or_else(|| MISSING_CELL.to_string())
    };

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, name)| {
            rows.iter()
                .map(|row| cell(row, i).chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render_line = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{:>w$}", c, w = w))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_line(header.to_vec()));
    for row in rows {
        lines.push(render_line((0..header.len()).map(|i| cell(row, i)).collect()));
    }
    lines.join("\n")
}
