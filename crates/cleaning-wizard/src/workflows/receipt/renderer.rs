use chrono::NaiveDate;
use std::fmt::Write;

use crate::workflows::inspection::{ClaimStatus, InspectionRecord};

/// Details printed on the receipt that are not part of the record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptContext {
    pub issued_on: NaiveDate,
}

/// Capability to turn a record into a downloadable artifact. The library
/// ships the plain-text renderer only; the printable PNG receipt
/// (`驗收單_<name>.png`) is produced by a raster renderer implementing this
/// trait in the presentation layer, returning `mime::IMAGE_PNG` and `"png"`.
pub trait ReceiptRenderer {
    fn media_type(&self) -> mime::Mime;

    fn file_extension(&self) -> &'static str;

    fn render(
        &self,
        record: &InspectionRecord,
        context: &ReceiptContext,
    ) -> Result<Vec<u8>, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("renderer unavailable: {0}")]
    Unavailable(String),
    #[error("failed to render receipt: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextReceiptRenderer;

fn check(value: bool) -> &'static str {
    if value {
        "[x]"
    } else {
        "[ ]"
    }
}

fn or_dash(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "-"
    } else {
        trimmed
    }
}

impl TextReceiptRenderer {
    fn write(
        &self,
        out: &mut String,
        record: &InspectionRecord,
        context: &ReceiptContext,
    ) -> std::fmt::Result {
        writeln!(out, "Cleaning service acceptance receipt")?;
        writeln!(out, "Issued: {}", context.issued_on)?;
        writeln!(out, "Customer: {}", or_dash(&record.customer_name))?;
        writeln!(out)?;

        writeln!(
            out,
            "{} 1. Service completed as expected",
            check(record.acknowledged_service_complete)
        )?;

        writeln!(out, "2. Belongings: {}", record.property_status.label())?;
        if record.property_status == ClaimStatus::Claimed {
            for (index, item) in record.item_reports.items().iter().enumerate() {
                writeln!(
                    out,
                    "   {}. {} ({}) remarks: {}",
                    index + 1,
                    or_dash(&item.name),
                    item.kind.label(),
                    or_dash(&item.remarks)
                )?;
            }
        }

        writeln!(out, "3. Staff conduct: {}", record.conduct_status.label())?;
        if record.conduct_status == ClaimStatus::Claimed {
            writeln!(out, "   detail: {}", or_dash(&record.conduct_detail))?;
        }

        writeln!(out, "4. Photos: {}", record.photo_preference.label())?;
        writeln!(
            out,
            "{} 5. Privacy notice acknowledged",
            check(record.privacy_acknowledged)
        )?;
        writeln!(
            out,
            "{} 6. Marketing consent",
            check(record.marketing_consent)
        )?;
        writeln!(out)?;

        let signature = match &record.signature {
            Some(signature) => format!("on file ({})", signature.media_type()),
            None => "missing".to_string(),
        };
        writeln!(out, "Signature: {signature}")
    }
}

impl ReceiptRenderer for TextReceiptRenderer {
    fn media_type(&self) -> mime::Mime {
        mime::TEXT_PLAIN_UTF_8
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn render(
        &self,
        record: &InspectionRecord,
        context: &ReceiptContext,
    ) -> Result<Vec<u8>, RenderError> {
        let mut out = String::new();
        self.write(&mut out, record, context)
            .map_err(|err| RenderError::Failed(err.to_string()))?;
        Ok(out.into_bytes())
    }
}
