use crate::domain::DecoratedEstate;
use crate::errors::ServerError;
use crate::templates::components::table::status_text;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

const HEADERS: [&str; 12] = [
    "Code",
    "Price",
    "Price (shown)",
    "Street",
    "Zip / Locality",
    "Living area (m²)",
    "Bedrooms",
    "Garden area (m²)",
    "Status",
    "Modified",
    "Agency",
    "Link",
];

/// One row per decorated estate; numbers stay numeric so the sheet can sort.
pub fn export_estates_xlsx(estates: &[DecoratedEstate<'_>]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    write_sheet(worksheet, estates).map_err(|e| ServerError::XlsxError(e.to_string()))?;

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

fn write_sheet(worksheet: &mut Worksheet, estates: &[DecoratedEstate<'_>]) -> Result<(), XlsxError> {
    let bold = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    for (i, estate) in estates.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet.write_number(r, 0, estate.immoweb_code as f64)?;
        worksheet.write_number(r, 1, estate.price as f64)?;
        worksheet.write_string(r, 2, &estate.display_price)?;
        worksheet.write_string(r, 3, &estate.display_street_and_number)?;
        worksheet.write_string(r, 4, &estate.display_zip_code)?;
        write_optional(worksheet, r, 5, estate.living_area)?;
        write_optional(worksheet, r, 6, estate.bedroom_count)?;
        write_optional(worksheet, r, 7, estate.garden_area)?;
        worksheet.write_string(r, 8, status_text(estate))?;
        worksheet.write_string(r, 9, &estate.display_modification_date)?;
        worksheet.write_string(r, 10, estate.agency_name.as_deref().unwrap_or(""))?;
        worksheet.write_url(r, 11, estate.listing_url().as_str())?;
    }

    worksheet.autofit();
    Ok(())
}

fn write_optional(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<i64>,
) -> Result<(), XlsxError> {
    if let Some(v) = value {
        worksheet.write_number(row, col, v as f64)?;
    }
    Ok(())
}
