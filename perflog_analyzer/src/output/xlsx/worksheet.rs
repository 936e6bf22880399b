//!
//! XLSX worksheet for the last-performance table.
//!

///
/// XLSX worksheet for the last-performance table.
///
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// The number of data rows written.
    pub rows: u32,
}

impl Worksheet {
    /// Width of the index column.
    const INDEX_COLUMN_WIDTH: f64 = 20.0;
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: f64 = 16.0;

    ///
    /// Creates a new worksheet with the index caption and one column per case.
    ///
    pub fn new(name: &str, index: &str, columns: &[String]) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        worksheet.write_with_format(0, 0, index, &Self::worksheet_caption_format())?;
        worksheet.set_column_width(0, Self::INDEX_COLUMN_WIDTH)?;
        for (position, column) in columns.iter().enumerate() {
            let column_index = (position as u16) + 1;
            worksheet.write_with_format(
                0,
                column_index,
                column.replace(':', "\n"),
                &Self::column_header_format(),
            )?;
            worksheet.set_column_width(column_index, Self::VALUE_COLUMN_WIDTH)?;
        }

        Ok(Self { worksheet, rows: 0 })
    }

    ///
    /// Appends a row: the index value and the cells, leaving missing ones blank.
    ///
    pub fn write_row(&mut self, index: &str, cells: &[Option<f64>]) -> anyhow::Result<()> {
        self.rows += 1;
        let row_index = self.rows;
        self.worksheet
            .write_with_format(row_index, 0, index, &Self::row_header_format())?;
        for (position, cell) in cells.iter().enumerate() {
            if let Some(value) = cell {
                self.worksheet.write_with_format(
                    row_index,
                    (position as u16) + 1,
                    *value,
                    &Self::value_format(),
                )?;
            }
        }
        Ok(())
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(14)
            .set_font_color("#FFFFFF")
            .set_background_color("#4C6EF5")
            .set_align(rust_xlsxwriter::FormatAlign::Center)
            .set_align(rust_xlsxwriter::FormatAlign::VerticalCenter)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#EEF3FF")
            .set_align(rust_xlsxwriter::FormatAlign::Center)
            .set_text_wrap()
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#DDE6FF")
            .set_align(rust_xlsxwriter::FormatAlign::Left)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#000000")
            .set_align(rust_xlsxwriter::FormatAlign::Right)
            .set_num_format("0.000")
    }
}
