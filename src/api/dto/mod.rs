pub mod interests_dto;
