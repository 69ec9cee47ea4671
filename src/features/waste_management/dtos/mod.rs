mod waste_management_dto;

pub use waste_management_dto::{CreateWasteManagementDto, UpdateWasteManagementDto};
