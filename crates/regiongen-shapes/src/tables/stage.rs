//! Stage field table

use regiongen_core::{FieldDescriptor, ValueType};

pub fn stage_fields() -> Vec<FieldDescriptor> {
    let enumeration = |name: &str| ValueType::Enum(name.to_string());

    vec![
        FieldDescriptor::new("groundSizeX", ValueType::Float)
            .notify()
            .comment("The X side-length of the ground plane in meters."),
        FieldDescriptor::new("groundSizeZ", ValueType::Float)
            .notify()
            .comment("The Z side-length of the ground plane in meters."),
        FieldDescriptor::new("skyType", enumeration("SkyType"))
            .notify()
            .comment("The sky box type"),
        FieldDescriptor::new("skyColor", ValueType::Color)
            .notify()
            .comment("The sky box tint"),
        FieldDescriptor::new("groundType", enumeration("GroundType"))
            .notify()
            .comment("The ground texture type"),
        FieldDescriptor::new("groundColor", ValueType::Color)
            .notify()
            .comment("The ground texture tint"),
        FieldDescriptor::new("initialCameraMode", enumeration("CameraMode"))
            .comment("TEMP really should be independent for play vs. build mode"),
        FieldDescriptor::new("isoCamRotationIndex", ValueType::Integer)
            .comment("TEMP really should be independent for play vs. build mode"),
        FieldDescriptor::new("sceneLightingMode", enumeration("SceneLightingMode"))
            .notify()
            .comment("Scene light mode."),
    ]
}
