pub mod epds;
pub mod phq9;
