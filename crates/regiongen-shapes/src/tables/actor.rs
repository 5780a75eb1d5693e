//! Actor field table
//!
//! Changing the persisted fields changes the saved binary layout; bump the
//! version number in `VoosActor.PersistedState` along with it.

use regiongen_core::{DownstreamEntry, FieldDescriptor, ValueType};

fn field(name: &str, value_type: ValueType) -> FieldDescriptor {
    FieldDescriptor::new(name, value_type)
}

pub fn actor_fields() -> Vec<FieldDescriptor> {
    use ValueType::{Boolean, Color, Float, Quaternion, String, Vector3};

    vec![
        field("displayName", String)
            .persisted()
            .reliable()
            .component_storage()
            .comment("The human-readable display name for the actor. Useful for edit mode inspecting and debugging."),
        field("description", String)
            .persisted()
            .reliable()
            .component_storage()
            .comment("The user-customizable descripion of the actor."),
        field("tint", Color).persisted().notify().comment("tint"),
        field("transformParent", String)
            .persisted()
            .reliable()
            .component_storage()
            .notify_with_prior()
            .comment("The name of the actor that is the transform-parent of this actor. Used for attach yourself to another, like when you get picked up."),
        field("position", Vector3)
            .persisted()
            .comment("The world-space position of the actor origin, which by default is the bottom-center of the object, ie. its position on the floor. However, this can be changed with setRenderableOffset."),
        field("localPosition", Vector3)
            .comment("The local position (position relative to parent's coordinate system)."),
        field("rotation", Quaternion)
            .persisted()
            .comment("The world-space rotation of the actor. This should be used to compute directions, like the forward facing direction of the actor, and if it does not correspond to the renderable model's forward (like where the head is facing for a lion model), you should fix it using the Rotate Tool or setRenderableRotation."),
        field("localRotation", Quaternion)
            .comment("The local rotation (rotation relative to parent's coordinate system)."),
        field("localScale", Vector3)
            .persisted()
            .reliable()
            .comment("The local scale of the actor."),
        field("renderableOffset", Vector3)
            .persisted()
            .reliable()
            .component_storage()
            .notify()
            .comment("The local position/offset of the rendered model (and collider) relative to the actor's origin."),
        field("renderableRotation", Quaternion)
            .persisted()
            .reliable()
            .component_storage()
            .notify()
            .comment("The local rotation of the rendered model (and collider) relative to the actor's rotation."),
        field("commentText", String)
            .persisted()
            .reliable()
            .component_storage()
            .comment("The text shown on comment signs created using the Comment Tool. Does not matter for non-sign actors."),
        field("spawnPosition", Vector3)
            .persisted()
            .reliable()
            .component_storage()
            .comment("The position the actor will be reset to upon ResetGame (F6). When you move it using the Move Tool, it also affects this, but scripted motion or physics does not."),
        field("spawnRotation", Quaternion)
            .persisted()
            .reliable()
            .component_storage()
            .comment("Like spawnPosition, but for rotation."),
        field("preferOffstage", Boolean)
            .persisted()
            .reliable()
            .component_storage()
            .default_value("false")
            .comment("If true, this object is in the virtual off-stage area, not on the actual scene."),
        field("isSolid", Boolean)
            .persisted()
            .reliable()
            .component_storage()
            .default_value("true")
            .comment("If true, other objects will collide and not go thruogh it. If false, it will still be visible, but other objects can go through it like a ghost."),
        field("enablePhysics", Boolean)
            .persisted()
            .reliable()
            .component_storage()
            .comment("Enable physics!"),
        field("enableGravity", Boolean)
            .persisted()
            .reliable()
            .component_storage()
            .comment("Enable gravity! Only works if enablePhysics is also true."),
        field("bounciness", Float).persisted().reliable().component_storage(),
        field("drag", Float).persisted().reliable().component_storage(),
        field("angularDrag", Float).persisted().reliable().component_storage(),
        field("mass", Float).persisted().reliable().component_storage(),
        field("freezeRotations", Boolean).persisted().reliable().component_storage(),
        field("freezeX", Boolean).persisted().reliable().component_storage(),
        field("freezeY", Boolean).persisted().reliable().component_storage(),
        field("freezeZ", Boolean).persisted().reliable().component_storage(),
        field("enableAiming", Boolean)
            .persisted()
            .reliable()
            .component_storage()
            .comment("GET RID OF THIS!"),
        field("hideInPlayMode", Boolean)
            .persisted()
            .reliable()
            .component_storage()
            .comment("This actor's model will not be rendered in play mode (but still visible in edit). Good for hiding things, like picked-up items."),
        field("keepUpright", Boolean)
            .persisted()
            .reliable()
            .component_storage()
            .comment("Keeps the object standing upright, but still responding to physics otherwise."),
        field("useDesiredVelocity", Boolean)
            .component_storage()
            .comment("Makes the object obey the \"desiredVelocity\" value, like a motor."),
        field("ignoreVerticalDesiredVelocity", Boolean)
            .component_storage()
            .comment("Ignore the vertical Y component of desiredVelocity. Use this if your character only moves on the ground, and does not fly, for example."),
        field("desiredVelocity", Vector3)
            .component_storage()
            .comment("The velocity the actor should move with. Make sure \"useDesiredVelocity\" is true for this to work."),
        field("isPlayerControllable", Boolean)
            .persisted()
            .reliable()
            .component_storage()
            .notify()
            .comment("Internal - do not use for now."),
        field("debugString", String)
            .persisted()
            .reliable()
            .component_storage()
            .comment("Internal - do not use for now"),
        field("worldRenderBoundsSize", Vector3)
            .read_only()
            .comment("Axis-aligned current world bounds"),
        field("worldRenderBoundsCenter", Vector3)
            .read_only()
            .comment("Axis-aligned current world bounds"),
        field("cloneParent", String)
            .read_only()
            .persisted()
            .reliable()
            .component_storage(),
        field("joinedTags", String)
            .reliable()
            .comment("Internal - do not use for now"),
        field("velocity", Vector3)
            .persisted()
            .comment("The direct rigidbody velocity parameter. Not valid if physics is not enabled."),
        field("angularVelocity", Vector3)
            .persisted()
            .comment("The direct rigidbody angular velocity parameter. Not valid if physics is not enabled."),
        field("cameraActor", String)
            .persisted()
            .component_storage()
            .comment("Internal - do not use for now"),
        field("spawnTransformParent", String)
            .persisted()
            .reliable()
            .component_storage()
            .comment("The name of the actor that is the transform-parent of this actor upon reset."),
        field("wasClonedByScript", Boolean)
            .persisted()
            .reliable()
            .component_storage()
            .default_value("false")
            .comment("If true, this object was created/cloned by script. So it will be treated differently by various systems, such as getting auto-destroyed upon ResetGame."),
        field("loopingAnimation", String)
            .persisted()
            .reliable()
            .component_storage()
            .comment("The clip name of the currently looping animation"),
        field("controllingVirtualPlayerId", String)
            .reliable()
            .component_storage()
            .notify()
            .comment("Internal - do not use for now"),
        field("cameraSettingsJson", String)
            .persisted()
            .component_storage()
            .notify()
            .comment("Internal - do not use for now"),
        field("lightSettingsJson", String)
            .persisted()
            .reliable()
            .component_storage()
            .notify()
            .comment("Internal - do not use for now"),
        field("pfxId", String).persisted().reliable().component_storage().notify(),
        field("sfxId", String).persisted().reliable().component_storage().notify(),
        field("useConcaveCollider", Boolean).persisted().reliable().component_storage(),
        field("isGrounded", Boolean).read_only(),
        field("speculativeColDet", Boolean)
            .persisted()
            .reliable()
            .component_storage()
            .comment("Enable continuous, speculative collision detection. This is expensive, but will help with fast objects going through walls. Note this only works if the object has primitive colliders!"),
        field("useStickyDesiredVelocity", Boolean)
            .persisted()
            .reliable()
            .component_storage()
            .comment("If true, then stickyDesiredVelocity should be enforced."),
        field("stickyDesiredVelocity", Vector3)
            .persisted()
            .reliable()
            .component_storage()
            .comment("Only relevant is useStickDesiredVelocity is true. Unlike normal desiredVelocity, this is persisted and networked. For things like kinematic projectiles (laser bolts) that just fly in one direction, this is all you need and it allows us to predict on remote clients."),
        field("stickyForce", Vector3)
            .persisted()
            .reliable()
            .component_storage()
            .comment("A constant force applied to the objects center of mass. Only valid if physics is enabled."),
    ]
}

/// Player-input state mirrored into scripts; never persisted or replicated
pub fn runtime_actor_fields() -> Vec<FieldDescriptor> {
    use ValueType::{Boolean, String, Vector3};

    vec![
        field("isSprinting", Boolean)
            .comment("(Only valid if isPlayerControllable is true) True if the player is holding the sprint key (usually shift)"),
        field("worldSpaceThrottle", Vector3)
            .comment("(Only valid if isPlayerControllable is true) The player input throttle transformed into world space, according to the camera."),
        field("inputThrottle", Vector3)
            .comment("(Only valid if isPlayerControllable is true) The raw player input throttle, so X is horizontal (A/D) and Y is vertical (W/S)"),
        field("aimDirection", Vector3)
            .comment("(Only valid if isPlayerControllable is true) For aiming ray casts, use this direction."),
        field("aimOrigin", Vector3)
            .comment("(Only valid if isPlayerControllable is true) For aiming ray casts, use this origin."),
        field("lastAimHitPoint", Vector3).comment("TODO"),
        field("aimingAtName", String).comment("TODO"),
        field("lookAxes", Vector3)
            .comment("(Only valid if isPlayerControllable is true) Look axes."),
    ]
}

pub fn actor_downstreams() -> Vec<DownstreamEntry> {
    vec![
        DownstreamEntry::new("UpdateGameObjectName", &["displayName"]),
        DownstreamEntry::new("UpdateCommentText", &["commentText"]),
        DownstreamEntry::new("UpdateRenderableHiddenState", &["hideInPlayMode"]),
        DownstreamEntry::new(
            "UpdateRigidbodyComponent",
            &[
                "enablePhysics",
                "enableGravity",
                "keepUpright",
                "mass",
                "drag",
                "angularDrag",
                "freezeRotations",
                "freezeX",
                "freezeY",
                "freezeZ",
                "speculativeColDet",
            ],
        ),
        DownstreamEntry::new("UpdatePhysicsMaterial", &["bounciness"]),
        DownstreamEntry::new("UpdateTriggerGhost", &["enablePhysics", "isSolid"]),
        DownstreamEntry::new("UpdateCollisionStayTracker", &["isPlayerControllable"]),
        DownstreamEntry::new(
            "OnEffectivelyOffstageChanged",
            &["preferOffstage", "transformParent"],
        ),
        DownstreamEntry::new("UpdateAnimation", &["loopingAnimation"]),
        DownstreamEntry::new("MaybeCorrectRotation", &["rotation", "keepUpright"]),
        DownstreamEntry::new(
            "UpdateColliders",
            &["useConcaveCollider", "enablePhysics", "isSolid"],
        ),
    ]
}
