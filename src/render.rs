//! Pure HTML rendering of generated puzzle pairs. Nothing here feeds back
//! into the generator; it only consumes finished grids.

use chrono::Local;

use crate::generator::PuzzlePair;
use crate::grid::{Grid, Pos, SIZE, SUBGRID};

const STYLE: &str = "<style>\
table { border-collapse: collapse; }\n\
td { border: 1px solid black; width: 20px; height: 20px; text-align: center; }\n\
td.empty { background-color: lightgray; }\n\
td.subgrid-separator { border: none; width: 10px; }\n\
</style>\n";

/// Renders one grid as a bordered table, with spacer columns and rows
/// marking the 3x3 subgrid boundaries. Empty cells get the `empty` class.
pub fn grid_table(grid: &Grid) -> String {
    let mut html = String::new();
    html.push_str("<table>\n");
    for r in 0..SIZE {
        html.push_str("<tr>");
        for c in 0..SIZE {
            let d = grid.get(Pos { r, c });
            if d == 0 {
                html.push_str("<td class=\"empty\"></td>");
            } else {
                html.push_str(&format!("<td>{d}</td>"));
            }
            if (c + 1) % SUBGRID == 0 && c < SIZE - 1 {
                html.push_str("<td class=\"subgrid-separator\"></td>");
            }
        }
        html.push_str("</tr>\n");
        if (r + 1) % SUBGRID == 0 && r < SIZE - 1 {
            html.push_str(&format!(
                "<tr><td colspan=\"{}\" class=\"subgrid-separator\"></td></tr>\n",
                SIZE + SUBGRID - 1
            ));
        }
    }
    html.push_str("</table>\n");
    html
}

/// Lays the pairs out as one flex row per pair: solved grid on the left,
/// playable grid on the right.
pub fn render_page(pairs: &[PuzzlePair]) -> String {
    let mut html = String::new();
    html.push_str("<html><body>");
    html.push_str(STYLE);
    for pair in pairs {
        html.push_str("<div style=\"display: flex;\">");
        for grid in [&pair.solved, &pair.playable] {
            html.push_str("<div style=\"flex: 1;\">");
            html.push_str("<hr/><br/>");
            html.push_str(&grid_table(grid));
            html.push_str("</div>");
        }
        html.push_str("</div><br/>");
    }
    html.push_str(&format!(
        "<p>Generated {}</p>",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    html.push_str("</body></html>");
    html
}
