pub mod water_quality_handler;

pub use water_quality_handler::{
    __path_create_water_quality, __path_delete_water_quality, __path_get_water_quality,
    __path_list_water_quality, __path_update_water_quality, create_water_quality,
    delete_water_quality, get_water_quality, list_water_quality, update_water_quality,
};
