//! Fixed-width table rendering for the month and year listings.

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn render_line(&self, cells: impl Iterator<Item = String>) -> String {
        let mut line = cells
            .zip(&self.columns)
            .map(|(cell, col)| format!("{:<width$}", cell, width = col.width))
            .collect::<Vec<_>>()
            .join(" ");
        line.push('\n');
        line
    }

    pub fn render(&self) -> String {
        let mut out = self.render_line(self.columns.iter().map(|c| c.header.clone()));

        out.push_str(&self.render_line(self.columns.iter().map(|c| "-".repeat(c.width))));

        for row in &self.rows {
            out.push_str(&self.render_line(row.iter().cloned()));
        }

        out
    }
}
