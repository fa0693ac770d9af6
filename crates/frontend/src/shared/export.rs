//! CSV export: builds the file content in memory and triggers a browser
//! download through a temporary object URL.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Rows that can be exported to CSV.
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// CSV content with a UTF-8 BOM (so Excel detects the encoding) and every
/// field quoted.
pub fn csv_content<T: CsvExportable>(data: &[T]) -> String {
    let mut out = String::new();
    out.push('\u{FEFF}');

    let headers: Vec<String> = T::headers().iter().map(|h| quote_csv_cell(h)).collect();
    out.push_str(&headers.join(","));
    out.push('\n');

    for item in data {
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| quote_csv_cell(cell))
            .collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("No hay datos para exportar".to_string());
    }
    let blob = create_csv_blob(&csv_content(data))?;
    download_blob(&blob, filename)
}

/// Every field is quoted; inner quotes are doubled.
fn quote_csv_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: String,
        amount: f64,
    }

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Nombre", "Valor"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.clone(), format!("{}", self.amount)]
        }
    }

    #[test]
    fn content_quotes_every_field_and_starts_with_bom() {
        let rows = vec![Row {
            name: "Cierre \"especial\"".to_string(),
            amount: 50_000.0,
        }];
        let content = csv_content(&rows);
        assert!(content.starts_with('\u{FEFF}'));
        assert!(content.contains("\"Nombre\",\"Valor\""));
        assert!(content.contains("\"Cierre \"\"especial\"\"\",\"50000\""));
    }
}
