pub mod aggregate;

pub use aggregate::{
    placement_label, Creative, CreativeDto, CreativeFormat, CreativeId, CreativeImage,
    MAX_IMAGE_BYTES, PLACEMENTS,
};
