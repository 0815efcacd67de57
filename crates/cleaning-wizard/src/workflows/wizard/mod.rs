//! Three-step visit wizard: checklist, provider fees, payment hand-off.

mod router;
mod seed;
mod session;
mod step;

pub use router::{wizard_router, DispatchRequest, RecordRequest, StartRequest};
pub use seed::{customer_name_from_url, seed_from_url};
pub use session::{reduce, Transition, TransitionOutcome, WizardAction, WizardSession};
pub use step::WizardStep;
