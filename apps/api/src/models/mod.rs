pub mod major;
pub mod occupation;

pub use major::MajorRecord;
pub use occupation::{
    EmploymentRate, OccupationRecord, OccupationSummary, Outlook, RawOccupation, RawSummary,
    SalaryRange,
};
