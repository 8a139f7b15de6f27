//! Movement domain: components, physics layers and small value types for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character body
    Player,
    /// Contact sensors attached to a character
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Unit vector pointing the way the character faces.
    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Right => Vec2::X,
            Facing::Left => Vec2::NEG_X,
        }
    }

    /// Facing for a signed horizontal value; `None` for zero.
    pub fn from_sign(x: f32) -> Option<Self> {
        if x > 0.0 {
            Some(Facing::Right)
        } else if x < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// Which side, if any, a wall sensor currently reports contact on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallContact {
    #[default]
    None,
    Left,
    Right,
}

impl WallContact {
    /// Facing that points away from the contacted wall.
    pub fn away_facing(self) -> Option<Facing> {
        match self {
            WallContact::None => None,
            WallContact::Left => Some(Facing::Right),
            WallContact::Right => Some(Facing::Left),
        }
    }

    pub fn is_touching(self) -> bool {
        self != WallContact::None
    }
}

/// Identity of a contact sensor region around a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Ground,
    WallLeft,
    WallRight,
}

/// Phase of a discrete input action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    Started,
    Performed,
    Canceled,
}

/// Named boolean animation parameters written by the motion controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationFlag {
    IsRunning,
    IsJumping,
    IsDashing,
    IsAgainstWall,
}

/// Snapshot of the four animation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationFlags {
    pub running: bool,
    pub jumping: bool,
    pub dashing: bool,
    pub against_wall: bool,
}

impl AnimationFlags {
    pub fn get(&self, flag: AnimationFlag) -> bool {
        match flag {
            AnimationFlag::IsRunning => self.running,
            AnimationFlag::IsJumping => self.jumping,
            AnimationFlag::IsDashing => self.dashing,
            AnimationFlag::IsAgainstWall => self.against_wall,
        }
    }

    pub fn set(&mut self, flag: AnimationFlag, value: bool) {
        match flag {
            AnimationFlag::IsRunning => self.running = value,
            AnimationFlag::IsJumping => self.jumping = value,
            AnimationFlag::IsDashing => self.dashing = value,
            AnimationFlag::IsAgainstWall => self.against_wall = value,
        }
    }
}
