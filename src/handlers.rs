pub mod campaigns;
pub mod certifications;
pub mod clients;
pub mod dashboard;
pub mod documents;
pub mod invoices;
pub mod projects;
pub mod quotations;
pub mod segments;
