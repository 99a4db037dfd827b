use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Fill/stroke colour, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const fn hex(v: u32) -> Self {
        Rgb(
            ((v >> 16) & 0xFF) as f32 / 255.0,
            ((v >> 8) & 0xFF) as f32 / 255.0,
            (v & 0xFF) as f32 / 255.0,
        )
    }
}

const TEXT: Rgb = Rgb::hex(0x2C3E50);
const MUTED: Rgb = Rgb::hex(0x777777);
const GRID: Rgb = Rgb::hex(0xA6A6A6);
const HEADER_FILL: Rgb = Rgb(0.85, 0.87, 0.90);
const STRIPE_FILL: Rgb = Rgb(0.96, 0.96, 0.96);
const TARGET: Rgb = Rgb::hex(0xE67E22);

/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_RATIO: f32 = 0.52;

/// A ranked or detail table inside a report page.
#[derive(Debug, Clone)]
pub struct TableBlock {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Relative column widths; equal widths when empty.
    pub weights: Vec<f32>,
    pub accent: Rgb,
    /// Bold last row (totals).
    pub total_row: bool,
}

/// A vertical bar chart.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub color: Rgb,
    /// Dashed reference line with its legend.
    pub target: Option<(f64, String)>,
    /// Polyline through the bar centres.
    pub trend: Option<Vec<f64>>,
}

/// Building blocks of a report page, laid out top to bottom.
#[derive(Debug, Clone)]
pub enum Block {
    Table(TableBlock),
    Bars(BarChart),
    Note(String),
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    chart_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    /// A4 portrait document.
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_id = Ref::new(4);
        let next_id = 5;

        // WinAnsi so accented Spanish text survives
        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 40.0,
            row_h: 18.0,
            chart_h: 170.0,

            next_id,
            font_id,
            bold_id,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 16.0,
        }
    }

    /// Switch to A4 landscape (before the first page is written).
    pub fn landscape(mut self) -> Self {
        self.page_w = 842.0;
        self.page_h = 595.0;
        self
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources()
            .fonts()
            .pair(Name(b"F1"), self.font_id)
            .pair(Name(b"F2"), self.bold_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    #[allow(clippy::too_many_arguments)]
    fn text_at(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        color: Rgb,
        text: &str,
    ) {
        let font = if bold { Name(b"F2") } else { Name(b"F1") };
        content.save_state();
        content.set_fill_rgb(color.0, color.1, color.2);
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&encode_win_ansi(text)));
        content.end_text();
        content.restore_state();
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        self.text_at(content, x, y, size, false, TEXT, text);
    }

    fn fill_rect(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        content.save_state();
        content.set_fill_rgb(color.0, color.1, color.2);
        content.rect(x, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        x_start: f32,
        row: &[String],
        font_size: f32,
    ) {
        let mut x = x_start;

        for (i, w) in col_widths.iter().enumerate() {
            let text = row.get(i).map(String::as_str).unwrap_or("");
            self.draw_text(content, x + 4.0, y + 5.0, font_size, &fit_text(text, w - 8.0, font_size));
            self.draw_cell_borders(content, x, y, *w, self.row_h);
            x += w;
        }
    }

    /// Column widths from header and content, scaled to fit the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let char_w = self.font_size * GLYPH_RATIO;
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * char_w + 8.0)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.chars().count() as f32 * char_w + 8.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.text_at(
            content,
            self.margin,
            self.page_h - self.margin,
            self.title_font_size,
            true,
            TEXT,
            title,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 40.0,
            self.margin - 25.0,
            self.font_size,
            &pg,
        );
    }

    fn draw_header_row(&self, content: &mut Content, y: f32, col_widths: &[f32], headers: &[String]) {
        self.fill_rect(content, self.margin, y, col_widths.iter().sum(), self.row_h, HEADER_FILL);
        self.draw_row(content, y, col_widths, self.margin, headers, self.header_font_size);
    }

    /// Multi-page table with a title; an empty table still gets its header.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut remaining: &[Vec<String>] = rows;

        loop {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, title, self.page_count());

            let mut y = self.page_h - self.margin - 30.0;
            self.draw_header_row(&mut content, y, &col_widths, &header_row);
            y -= self.row_h;

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y - self.row_h < self.margin {
                    break;
                }

                if i % 2 == 0 {
                    self.fill_rect(
                        &mut content,
                        self.margin,
                        y,
                        col_widths.iter().sum(),
                        self.row_h,
                        STRIPE_FILL,
                    );
                }

                self.draw_row(&mut content, y, &col_widths, self.margin, row, self.font_size);

                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];

            // a page that fits no row at all would loop forever
            if remaining.is_empty() || consumed == 0 {
                break;
            }
        }
    }

    /// One report page (more when the blocks overflow), blocks stacked top
    /// to bottom under `title`.
    pub fn write_page(&mut self, title: &str, blocks: &[Block]) {
        let top = self.page_h - self.margin - 30.0;

        let mut content = self.new_page();
        self.draw_page_header_footer(&mut content, title, self.page_count());
        let mut y = top;

        for block in blocks {
            let needed = self.block_height(block);
            if y - needed < self.margin && y < top {
                self.finalize_page(content);
                content = self.new_page();
                self.draw_page_header_footer(&mut content, title, self.page_count());
                y = top;
            }

            y = match block {
                Block::Table(t) => self.draw_table_block(&mut content, y, t),
                Block::Bars(c) => self.draw_bar_chart(&mut content, y, c),
                Block::Note(text) => {
                    self.text_at(&mut content, self.margin, y - 14.0, 11.0, false, MUTED, text);
                    y - 24.0
                }
            };
        }

        self.finalize_page(content);
    }

    fn block_height(&self, block: &Block) -> f32 {
        match block {
            Block::Table(t) => {
                let widths = self.weighted_widths(t);
                let body: f32 = t
                    .rows
                    .iter()
                    .map(|r| self.wrapped_row_height(r, &widths))
                    .sum();
                22.0 + self.row_h + body.max(self.row_h) + 14.0
            }
            Block::Bars(_) => self.chart_h + 60.0,
            Block::Note(_) => 24.0,
        }
    }

    fn weighted_widths(&self, t: &TableBlock) -> Vec<f32> {
        let avail = self.page_w - 2.0 * self.margin;
        let cols = t.headers.len().max(1);
        let weights: Vec<f32> = if t.weights.len() == cols {
            t.weights.clone()
        } else {
            vec![1.0; cols]
        };
        let total: f32 = weights.iter().sum();
        weights.iter().map(|w| avail * w / total).collect()
    }

    fn wrap_width(&self, col_w: f32) -> usize {
        (((col_w - 8.0) / (self.font_size * GLYPH_RATIO)) as usize).max(4)
    }

    fn wrapped_row_height(&self, row: &[String], widths: &[f32]) -> f32 {
        let lines = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| textwrap::wrap(cell, self.wrap_width(*w)).len().max(1))
            .max()
            .unwrap_or(1);
        self.row_h + (lines as f32 - 1.0) * (self.font_size + 2.0)
    }

    fn draw_table_block(&self, content: &mut Content, y: f32, t: &TableBlock) -> f32 {
        let widths = self.weighted_widths(t);
        let table_w: f32 = widths.iter().sum();

        self.text_at(content, self.margin, y - 14.0, 12.0, true, t.accent, &t.title);
        let mut y = y - 22.0 - self.row_h;

        self.fill_rect(content, self.margin, y, table_w, self.row_h, t.accent);
        let mut x = self.margin;
        for (h, w) in t.headers.iter().zip(&widths) {
            self.text_at(
                content,
                x + 4.0,
                y + 5.0,
                self.header_font_size,
                true,
                Rgb(1.0, 1.0, 1.0),
                &fit_text(h, w - 8.0, self.header_font_size),
            );
            x += w;
        }

        if t.rows.is_empty() {
            y -= self.row_h;
            self.text_at(content, self.margin + 4.0, y + 5.0, self.font_size, false, MUTED, "No data available");
            return y - 14.0;
        }

        let last = t.rows.len() - 1;
        for (i, row) in t.rows.iter().enumerate() {
            let h = self.wrapped_row_height(row, &widths);
            y -= h;
            let bold = t.total_row && i == last;

            if i % 2 == 1 {
                self.fill_rect(content, self.margin, y, table_w, h, STRIPE_FILL);
            }

            let mut x = self.margin;
            for (cell, w) in row.iter().zip(&widths) {
                let lines = textwrap::wrap(cell, self.wrap_width(*w));
                let mut ly = y + h - self.font_size - 4.0;
                for line in &lines {
                    self.text_at(content, x + 4.0, ly, self.font_size, bold, TEXT, line);
                    ly -= self.font_size + 2.0;
                }
                self.draw_cell_borders(content, x, y, *w, h);
                x += w;
            }
        }

        y - 14.0
    }

    fn draw_bar_chart(&self, content: &mut Content, y: f32, c: &BarChart) -> f32 {
        self.text_at(content, self.margin, y - 14.0, 12.0, true, TEXT, &c.title);

        let x0 = self.margin + 30.0;
        let w = self.page_w - 2.0 * self.margin - 30.0;
        let base = y - 24.0 - self.chart_h;
        let bottom = base - 36.0;

        if c.values.is_empty() {
            self.text_at(
                content,
                x0 + w / 2.0 - 30.0,
                base + self.chart_h / 2.0,
                10.0,
                false,
                MUTED,
                "No data",
            );
            return bottom;
        }

        let target_value = c.target.as_ref().map(|(v, _)| *v).unwrap_or(0.0);
        let max_val = c
            .values
            .iter()
            .copied()
            .fold(target_value, f64::max)
            .max(1.0)
            * 1.15;
        let scale = |v: f64| (v / max_val) as f32 * self.chart_h;

        // axes
        content.save_state();
        content.set_stroke_rgb(GRID.0, GRID.1, GRID.2);
        content.set_line_width(0.8);
        content.move_to(x0, base);
        content.line_to(x0 + w, base);
        content.move_to(x0, base);
        content.line_to(x0, base + self.chart_h);
        content.stroke();
        content.restore_state();

        let n = c.values.len();
        let slot = w / n as f32;
        let bar_w = slot * 0.6;
        let label_chars = ((slot / (8.0 * GLYPH_RATIO)) as usize).max(4);

        let mut centres = Vec::with_capacity(n);
        for (i, v) in c.values.iter().enumerate() {
            let cx = x0 + slot * (i as f32 + 0.5);
            centres.push(cx);
            let h = scale(v.max(0.0));
            self.fill_rect(content, cx - bar_w / 2.0, base, bar_w, h, c.color);

            let value_text = format!("{}", v.round() as i64);
            self.text_at(
                content,
                cx - text_width(&value_text, 8.0) / 2.0,
                base + h + 3.0,
                8.0,
                true,
                TEXT,
                &value_text,
            );

            if let Some(label) = c.labels.get(i) {
                for (k, line) in textwrap::wrap(label, label_chars).iter().take(2).enumerate() {
                    self.text_at(
                        content,
                        cx - text_width(line, 8.0) / 2.0,
                        base - 11.0 - k as f32 * 10.0,
                        8.0,
                        false,
                        TEXT,
                        line,
                    );
                }
            }
        }

        if let Some((value, legend)) = &c.target {
            let ty = base + scale(*value);
            content.save_state();
            content.set_stroke_rgb(TARGET.0, TARGET.1, TARGET.2);
            content.set_line_width(1.5);
            content.set_dash_pattern([4.0, 3.0], 0.0);
            content.move_to(x0, ty);
            content.line_to(x0 + w, ty);
            content.stroke();
            content.restore_state();
            self.text_at(
                content,
                x0 + w - text_width(legend, 8.0),
                ty + 3.0,
                8.0,
                false,
                TARGET,
                legend,
            );
        }

        if let Some(trend) = &c.trend
            && trend.len() == n
        {
            content.save_state();
            content.set_stroke_rgb(TARGET.0, TARGET.1, TARGET.2);
            content.set_line_width(2.0);
            for (i, (cx, v)) in centres.iter().zip(trend).enumerate() {
                let ty = base + scale(v.max(0.0));
                if i == 0 {
                    content.move_to(*cx, ty);
                } else {
                    content.line_to(*cx, ty);
                }
            }
            content.stroke();
            content.restore_state();
        }

        bottom
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Map text onto WinAnsi bytes; characters outside Latin-1 become `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_RATIO
}

/// Truncate `text` with `...` so it fits `width` points.
fn fit_text(text: &str, width: f32, size: f32) -> String {
    let max_chars = (width / (size * GLYPH_RATIO)).max(0.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let mut s: String = text.chars().take(max_chars - 3).collect();
    s.push_str("...");
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_text_keeps_accents() {
        assert_eq!(encode_win_ansi("Área"), vec![0xC1, b'r', b'e', b'a']);
        assert_eq!(encode_win_ansi("→"), vec![b'?']);
    }

    #[test]
    fn long_text_is_truncated() {
        let s = fit_text("a very long description of the problem", 40.0, 10.0);
        assert!(s.ends_with("..."));
        assert!(s.chars().count() <= 7);
        assert_eq!(fit_text("ok", 40.0, 10.0), "ok");
    }

    #[test]
    fn hex_colour_components() {
        let c = Rgb::hex(0xFF0000);
        assert_eq!(c, Rgb(1.0, 0.0, 0.0));
    }
}
