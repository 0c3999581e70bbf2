use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const WORDS: &[&str] = &[
    "overlay", "thumb", "track", "scroll", "viewport", "content", "fade", "hover", "drag",
    "pointer", "frame", "résumé", "日本語", "naïve", "→", "offset", "extent", "ratio",
];

/// A generated text document, taller and wider than any terminal.
pub struct Document {
    lines: Vec<String>,
    width: usize,
}

impl Document {
    pub fn generate(line_count: usize) -> Self {
        let lines: Vec<String> = (0..line_count)
            .map(|i| {
                let words = 4 + (i * 7) % 40;
                let body: Vec<&str> = (0..words)
                    .map(|w| WORDS[(i * 3 + w * 5) % WORDS.len()])
                    .collect();
                format!("{:>4} │ {}", i + 1, body.join(" "))
            })
            .collect();
        let width = lines.iter().map(|line| line.width()).max().unwrap_or(0);
        Self { lines, width }
    }

    /// Widest line in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// The columns `first_col..first_col + cols` of line `row`, padded with
    /// spaces. Wide characters cut by either edge become spaces.
    pub fn slice(&self, row: usize, first_col: usize, cols: usize) -> String {
        let mut out = String::with_capacity(cols);
        let mut written = 0;
        let Some(line) = self.lines.get(row) else {
            return " ".repeat(cols);
        };

        let mut col = 0;
        for ch in line.chars() {
            let w = ch.width().unwrap_or(0);
            let end = col + w;
            if end > first_col && col < first_col + cols {
                if col < first_col || end > first_col + cols {
                    // Partially visible wide char.
                    let visible = end.min(first_col + cols) - col.max(first_col);
                    out.push_str(&" ".repeat(visible));
                    written += visible;
                } else {
                    out.push(ch);
                    written += w;
                }
            }
            col = end;
            if col >= first_col + cols {
                break;
            }
        }

        if written < cols {
            out.push_str(&" ".repeat(cols - written));
        }
        out
    }
}
