//! Remote API function table
//!
//! Each entry is a script function that other actors may ask this actor to
//! run on itself, with its comma-separated argument list.

pub const REMOTE_API_FUNCTIONS: &[(&str, &str)] = &[
    ("setPos", "worldPos"),
    ("setYaw", "yawRadians"),
    ("setPitch", "pitchRadians"),
    ("setRoll", "rollRadians"),
    ("setYawPitchRoll", "yawRadians, pitchRadians, rollRadians"),
    ("turn", "radians, axis"),
    ("applyQuaternion", "quat"),
    ("applyQuaternionSelf", "quat"),
    ("setRot", "rot"),
    ("resetRot", ""),
    ("lookAt", "targetActorOrPoint, yawOnly"),
    ("lookDir", "direction, yawOnly"),
    ("setScaleUniform", "scale"),
    ("setScale", "scale"),
    ("attachToParent", "newParent"),
    ("detachFromParent", ""),
    ("setVar", "name, value"),
    ("deleteVar", "name"),
    ("setDisplayName", "name"),
    ("setCommentText", "newText"),
    ("setSolid", "isSolid"),
    ("setKinematic", "isKinematic"),
    ("enableGravity", "enableGravity"),
    ("enableKeepUpright", "keepUpright"),
    ("setBounciness", "bounciness"),
    ("setMass", "mass"),
    ("setDrag", "drag"),
    ("setAngularDrag", "drag"),
    ("setPhysicsPreset", "preset"),
    ("addVelocity", "velocity"),
    ("setCameraActor", "cameraActor"),
    ("setIsPlayerControllable", "value"),
    ("setControllingPlayer", "playerId"),
    ("setBodyPos", "pos"),
    ("setBodyRot", "rot"),
    ("setTintColor", "color"),
    ("setTintHex", "colorHex"),
    ("show", "visible"),
    ("hide", ""),
    ("destroySelf", ""),
];
