//! Table style cascade.
//!
//! A table's six style flags are read from its own `a:tblPr` and paired with
//! the shared style definition in a `TableStyleView` built per table; the
//! definition itself is never modified. Each cell attribute (fill, font
//! colour, bold) is taken from the first source that defines it:
//!
//! 1. the cell's own `a:tcPr` fill
//! 2. the corner region, when both boundary flags of that corner are set
//! 3. `firstCol` / `lastCol`
//! 4. `firstRow` / `lastRow`
//! 5. vertical banding (`band2V`, falling back to `band1V`) on odd columns
//! 6. horizontal banding (`band1H` / `band2H`) on data rows
//! 7. `wholeTbl`
//! 8. the table background (fill only)

use super::geometry::resolve_frame;
use super::placeholder::PlaceholderChain;
use super::result::{Element, TableCell, TableElement};
use super::walker::{SlideContext, Walker};
use crate::error::Result;
use crate::extract::border::table_border;
use crate::extract::color::color_of;
use crate::extract::fill::fill_of;
use crate::extract::ColorScheme;
use crate::xml::{XmlNode, A, P};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableFlags {
    pub first_row: bool,
    pub first_col: bool,
    pub last_row: bool,
    pub last_col: bool,
    pub band_row: bool,
    pub band_col: bool,
}

impl TableFlags {
    pub fn of(tbl_pr: Option<XmlNode<'_>>) -> Self {
        let Some(pr) = tbl_pr else {
            return Self::default();
        };
        Self {
            first_row: pr.attr_flag("firstRow"),
            first_col: pr.attr_flag("firstCol"),
            last_row: pr.attr_flag("lastRow"),
            last_col: pr.attr_flag("lastCol"),
            band_row: pr.attr_flag("bandRow"),
            band_col: pr.attr_flag("bandCol"),
        }
    }
}

/// Position of a cell in a `rows` × `cols` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl CellPosition {
    fn is_last_row(&self) -> bool {
        self.row + 1 == self.rows
    }

    fn is_last_col(&self) -> bool {
        self.col + 1 == self.cols
    }
}

/// Style attributes resolved for one cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellStyle {
    /// `Some("")` is an explicit no-fill.
    pub fill: Option<String>,
    pub font_color: Option<String>,
    pub bold: Option<bool>,
}

/// A table style definition paired with one table's flags.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleView<'a> {
    pub style: Option<XmlNode<'a>>,
    pub flags: TableFlags,
}

impl<'a> TableStyleView<'a> {
    pub fn new(style: Option<XmlNode<'a>>, flags: TableFlags) -> Self {
        Self { style, flags }
    }

    pub fn region(&self, name: &str) -> Option<XmlNode<'a>> {
        self.style?.child(&A::region(name))
    }

    /// Names of the style regions governing a cell, highest precedence first.
    /// Only regions the style defines are returned.
    pub fn regions(&self, at: CellPosition) -> Vec<&'static str> {
        let f = self.flags;
        let first_row = f.first_row && at.row == 0;
        let last_row = f.last_row && at.is_last_row();
        let first_col = f.first_col && at.col == 0;
        let last_col = f.last_col && at.is_last_col();

        let mut names = Vec::new();
        let corners = [
            (first_row && first_col, "nwCell"),
            (first_row && last_col, "neCell"),
            (last_row && first_col, "swCell"),
            (last_row && last_col, "seCell"),
        ];
        names.extend(corners.iter().filter(|(applies, _)| *applies).map(|(_, n)| *n));

        if first_col {
            names.push("firstCol");
        }
        if last_col {
            names.push("lastCol");
        }
        if first_row {
            names.push("firstRow");
        }
        if last_row {
            names.push("lastRow");
        }

        if f.band_col && !first_col && !last_col && at.col % 2 == 1 {
            if self.region("band2V").is_some() {
                names.push("band2V");
            } else {
                names.push("band1V");
            }
        }
        if f.band_row && !first_row && !last_row {
            let data_row = at.row - usize::from(f.first_row);
            names.push(if data_row % 2 == 0 { "band1H" } else { "band2H" });
        }

        names.push("wholeTbl");
        names.retain(|name| self.region(name).is_some());
        names
    }

    pub fn cell_style(&self, tc: XmlNode<'_>, at: CellPosition, colors: &ColorScheme) -> CellStyle {
        let regions: Vec<XmlNode<'a>> = self
            .regions(at)
            .into_iter()
            .filter_map(|name| self.region(name))
            .collect();

        let fill = tc
            .child(&A::tcPr())
            .and_then(|pr| fill_of(pr, colors))
            .or_else(|| regions.iter().find_map(|r| region_fill(*r, colors)))
            .or_else(|| self.background(colors));

        let text_styles = || regions.iter().filter_map(|r| r.child(&A::tcTxStyle()));
        let font_color = text_styles().find_map(|t| color_of(t, colors));
        let bold = text_styles().find_map(|t| match t.attr("b") {
            Some("on") => Some(true),
            Some("off") => Some(false),
            _ => None,
        });

        CellStyle {
            fill,
            font_color,
            bold,
        }
    }

    fn background(&self, colors: &ColorScheme) -> Option<String> {
        let tbl_bg = self.style?.child(&A::tblBg())?;
        tbl_bg
            .child(&A::fillRef())
            .and_then(|r| color_of(r, colors))
            .or_else(|| fill_of(tbl_bg, colors))
    }
}

fn region_fill(region: XmlNode<'_>, colors: &ColorScheme) -> Option<String> {
    let tc_style = region.child(&A::tcStyle())?;
    tc_style
        .child(&A::fill())
        .and_then(|f| fill_of(f, colors))
        .or_else(|| tc_style.child(&A::fillRef()).and_then(|r| color_of(r, colors)))
}

/// A table graphic frame.
pub fn table(walker: &mut Walker<'_, '_>, frame_node: XmlNode<'_>, tbl: XmlNode<'_>) -> Result<Element> {
    let ctx = walker.context();
    let order = walker.reserve_order();
    let frame = resolve_frame(&[frame_node.child(&P::xfrm())], 0.0, order)?;

    let tbl_pr = tbl.child(&A::tblPr());
    let style = tbl_pr
        .and_then(|pr| pr.child(&A::tableStyleId()))
        .map(|id| id.text())
        .and_then(|id| {
            let style = ctx.parts.table_style(id.trim());
            if style.is_none() {
                tracing::debug!(style_id = %id, "table style not found");
            }
            style
        });
    let view = TableStyleView::new(style, TableFlags::of(tbl_pr));

    let border = view
        .region("wholeTbl")
        .and_then(|r| r.path(&[A::tcStyle(), A::tcBdr()]))
        .and_then(|bdr| table_border(bdr, ctx.colors));

    let rows: Vec<Vec<XmlNode<'_>>> = tbl
        .children_named(A::tr())
        .map(|tr| tr.children_named(A::tc()).collect())
        .collect();
    let row_count = rows.len();

    let data = rows
        .iter()
        .enumerate()
        .map(|(i, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(j, tc)| {
                    let at = CellPosition {
                        row: i,
                        col: j,
                        rows: row_count,
                        cols: cells.len(),
                    };
                    table_cell(ctx, &view, *tc, at)
                })
                .collect()
        })
        .collect();

    Ok(Element::Table(TableElement { frame, data, border }))
}

fn table_cell(ctx: &SlideContext<'_>, view: &TableStyleView<'_>, tc: XmlNode<'_>, at: CellPosition) -> TableCell {
    let text = tc
        .child(&A::txBody())
        .map(|body| {
            ctx.extractors
                .text_body(body, &PlaceholderChain::single(tc), "", ctx.colors)
        })
        .unwrap_or_default();
    let style = view.cell_style(tc, at, ctx.colors);
    let span = |name| tc.attr_i64(name).filter(|v| *v > 0).map(|v| v as u32);
    let merged = |name| tc.attr_flag(name).then_some(true);

    TableCell {
        text,
        row_span: span("rowSpan"),
        col_span: span("gridSpan"),
        v_merge: merged("vMerge"),
        h_merge: merged("hMerge"),
        font_bold: style.bold.filter(|b| *b),
        font_color: style.font_color.filter(|c| !c.is_empty()),
        fill_color: style.fill.filter(|c| !c.is_empty()),
    }
}
