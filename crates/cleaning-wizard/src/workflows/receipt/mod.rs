//! Exporting the completed checklist as a downloadable receipt.

mod naming;
mod renderer;

pub use naming::receipt_file_name;
pub use renderer::{ReceiptContext, ReceiptRenderer, RenderError, TextReceiptRenderer};

use crate::workflows::inspection::InspectionRecord;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptArtifact {
    pub file_name: String,
    pub media_type: mime::Mime,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Renders `record` as it stands right now. The record is only borrowed, so
/// a failed export leaves it exactly as it was.
pub fn export_receipt<R>(
    record: &InspectionRecord,
    renderer: &R,
    context: &ReceiptContext,
) -> Result<ReceiptArtifact, ReceiptError>
where
    R: ReceiptRenderer + ?Sized,
{
    let file_name = receipt_file_name(&record.customer_name, renderer.file_extension());

    let bytes = renderer.render(record, context).map_err(|err| {
        warn!(%file_name, error = %err, "receipt export failed");
        err
    })?;

    debug!(%file_name, size = bytes.len(), "receipt rendered");
    Ok(ReceiptArtifact {
        file_name,
        media_type: renderer.media_type(),
        bytes,
    })
}
