mod requests;
mod responses;
mod types;

pub use requests::RecordFields;
pub use responses::{
    CreateRecordResponse, DeleteRecordResponse, FailureDetail, GetRecordResponse, MessageBody,
    ScanRecordsResponse, UpdateRecordResponse, UploadResponse,
};
pub use types::{PutAck, Record, UploadedFile};
