use chrono::{Local, NaiveDate};
use clap::Args;
use cleaning_wizard::config::AppConfig;
use cleaning_wizard::error::AppError;
use cleaning_wizard::workflows::fees::{
    format_amount, parse_amount, parse_hours, AmountInput, FeeState, FeeUpdate, HoursInput,
};
use cleaning_wizard::workflows::inspection::{
    ClaimStatus, InspectionRecord, InspectionUpdate, ItemChange, ItemKind, PhotoPreference,
    SignatureImage,
};
use cleaning_wizard::workflows::payment::PaymentHandoff;
use cleaning_wizard::workflows::receipt::{export_receipt, ReceiptContext, TextReceiptRenderer};
use cleaning_wizard::workflows::wizard::{
    reduce, TransitionOutcome, WizardAction, WizardSession,
};
use std::fs;
use std::path::PathBuf;

const DEMO_SIGNATURE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

#[derive(Args, Debug)]
pub(crate) struct FeesArgs {
    /// Total service amount; anything non-numeric or negative counts as 0
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub(crate) service_amount: String,
    /// Overtime hours, truncated to whole hours
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub(crate) overtime_hours: String,
}

#[derive(Args, Debug)]
pub(crate) struct ReceiptArgs {
    /// JSON file holding an inspection record
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Directory the receipt is written into
    #[arg(long, default_value = ".")]
    pub(crate) out_dir: PathBuf,
    /// Date printed on the receipt (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Link the customer opened, used to pre-fill their name
    #[arg(long)]
    pub(crate) url: Option<String>,
    /// Service amount entered by the provider
    #[arg(long, default_value_t = 3000.0)]
    pub(crate) service_amount: f64,
    /// Overtime hours entered by the provider
    #[arg(long, default_value_t = 2)]
    pub(crate) overtime_hours: u32,
    /// Report a damaged item so the claimed-property branch is exercised
    #[arg(long)]
    pub(crate) with_claim: bool,
    /// Write the text receipt into this directory
    #[arg(long)]
    pub(crate) receipt_dir: Option<PathBuf>,
}

pub(crate) fn run_fees(args: FeesArgs) -> Result<(), AppError> {
    let fees = FeeState::recompute(
        parse_amount(&args.service_amount),
        f64::from(parse_hours(&args.overtime_hours)),
    );
    render_fees(&fees);
    Ok(())
}

pub(crate) fn run_receipt(args: ReceiptArgs) -> Result<(), AppError> {
    let ReceiptArgs {
        input,
        out_dir,
        today,
    } = args;

    let raw = fs::read_to_string(&input)?;
    let record: InspectionRecord = serde_json::from_str(&raw)?;
    let context = ReceiptContext {
        issued_on: today.unwrap_or_else(|| Local::now().date_naive()),
    };

    let artifact = export_receipt(&record, &TextReceiptRenderer, &context)?;
    fs::create_dir_all(&out_dir)?;
    let path = out_dir.join(&artifact.file_name);
    fs::write(&path, &artifact.bytes)?;

    println!("Receipt written to {}", path.display());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        url,
        service_amount,
        overtime_hours,
        with_claim,
        receipt_dir,
    } = args;

    let config = AppConfig::load()?;
    let url = url.unwrap_or_else(|| "https://visit.example.com/#/?name=Chen".to_string());

    println!("Cleaning visit wizard demo");
    let mut session = WizardSession::seeded(&url);
    println!(
        "Seeded from {url}: customer '{}'",
        session.inspection.customer_name
    );

    session = dispatch(&session, WizardAction::Next);

    let mut updates = vec![
        InspectionUpdate::ServiceComplete(true),
        InspectionUpdate::PhotoPreference(PhotoPreference::Saved),
        InspectionUpdate::PrivacyAcknowledged(true),
        InspectionUpdate::MarketingConsent(false),
    ];
    if session.inspection.customer_name.trim().is_empty() {
        updates.push(InspectionUpdate::CustomerName("Demo customer".to_string()));
    }
    if with_claim {
        updates.push(InspectionUpdate::PropertyStatus(ClaimStatus::Claimed));
    }
    for update in updates {
        session = dispatch(&session, WizardAction::Inspection(update));
    }

    if with_claim {
        session = dispatch(&session, WizardAction::Next);
        session = dispatch(&session, WizardAction::Inspection(InspectionUpdate::AddItem));
        if let Some(id) = session.inspection.item_reports.items().last().map(|item| item.id) {
            for change in [
                ItemChange::Name("Glass vase".to_string()),
                ItemChange::Kind(ItemKind::Damage),
            ] {
                session = dispatch(
                    &session,
                    WizardAction::Inspection(InspectionUpdate::UpdateItem { id, change }),
                );
            }
        }
    }

    if let Err(err) = SignatureImage::from_data_url("") {
        println!("- Blank signature refused: {err}");
    }
    let signature = SignatureImage::from_data_url(DEMO_SIGNATURE)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
    session = dispatch(
        &session,
        WizardAction::Inspection(InspectionUpdate::Sign(signature)),
    );

    if let Some(dir) = receipt_dir {
        let context = ReceiptContext {
            issued_on: Local::now().date_naive(),
        };
        match export_receipt(&session.inspection, &TextReceiptRenderer, &context) {
            Ok(artifact) => {
                fs::create_dir_all(&dir)?;
                let path = dir.join(&artifact.file_name);
                fs::write(&path, &artifact.bytes)?;
                println!("- Receipt saved to {}", path.display());
            }
            Err(err) => println!("- Receipt export skipped: {err}"),
        }
    }

    session = dispatch(&session, WizardAction::Next);
    for update in [
        FeeUpdate::ServiceAmount(AmountInput(service_amount)),
        FeeUpdate::OvertimeHours(HoursInput(overtime_hours)),
    ] {
        session = dispatch(&session, WizardAction::Fees(update));
    }
    render_fees(&session.fees);

    session = dispatch(&session, WizardAction::Next);
    let handoff = PaymentHandoff::new(&session.fees, &config.payment);
    println!("\nPayment hand-off");
    println!("- Link: {}", handoff.payment_url);
    println!("- QR payload: {}", handoff.qr_payload);
    println!("- Balance due: {}", handoff.summary.balance_due);
    println!("- Deposit: {}", handoff.summary.deposit);
    println!("- Overtime: {}", handoff.summary.overtime);

    Ok(())
}

fn dispatch(session: &WizardSession, action: WizardAction) -> WizardSession {
    let transition = reduce(session, action);
    match &transition.outcome {
        TransitionOutcome::Updated => {}
        TransitionOutcome::Moved { from, to } => {
            println!(
                "\nStep {} -> {}: {}",
                from.ordinal(),
                to.ordinal(),
                to.label()
            );
        }
        TransitionOutcome::Blocked { missing } => {
            println!("- Cannot continue yet, still missing:");
            for requirement in missing {
                println!("  - {}", requirement.label());
            }
        }
        TransitionOutcome::AtBoundary { step } => {
            println!("- Already at the edge of the wizard ({})", step.label());
        }
        TransitionOutcome::NotEditable { step } => {
            println!("- Edit ignored while on {}", step.label());
        }
    }
    transition.session
}

fn render_fees(fees: &FeeState) {
    println!("\nProvider fees");
    println!("- Service amount: ${}", format_amount(fees.service_amount()));
    println!("- Deposit (30%): ${}", format_amount(fees.deposit_amount()));
    println!(
        "- Overtime: {}h -> ${}",
        fees.overtime_hours(),
        format_amount(fees.overtime_amount())
    );
    println!("- Balance due: ${}", format_amount(fees.balance_due()));
}
