//! Draw command generation
//!
//! Turns a [`Snapshot`] into an ordered list of drawing intents. The platform
//! renderer resolves sprite names to pre-loaded images and fonts; nothing
//! here touches pixels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, Snapshot};

pub type Rgb = [u8; 3];

pub const BLACK: Rgb = [0, 0, 0];
pub const WHITE: Rgb = [255, 255, 255];

pub const TITLE: &str = "SPACE FLYER";

/// Sprite asset names
pub mod sprites {
    pub const BACKGROUND: &str = "1.png";
    pub const CLOUDS: &str = "clouds.png";
    pub const CRAFT: &str = "tiny_ship.png";
    pub const HAZARD: &str = "asteroids#01.png";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Font {
    /// 30px headline
    Title,
    /// 20px HUD text
    Score,
}

/// Where a text block is placed relative to its measured size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Anchor {
    /// Horizontally centered, top edge at `y`
    TopCenter(Vec2),
    /// Centered on the point
    Center(Vec2),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear {
        color: Rgb,
    },
    /// Sprite with its top-left corner at `pos`
    Sprite {
        name: String,
        pos: Vec2,
    },
    /// Sprite centered on `center` (size known only to the renderer)
    CenteredSprite {
        name: String,
        center: Vec2,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgb,
    },
    Text {
        content: String,
        font: Font,
        anchor: Anchor,
        color: Rgb,
    },
}

impl DrawCommand {
    fn sprite(name: &str, pos: Vec2) -> Self {
        DrawCommand::Sprite {
            name: name.to_string(),
            pos,
        }
    }

    fn text(content: impl Into<String>, font: Font, anchor: Anchor) -> Self {
        DrawCommand::Text {
            content: content.into(),
            font,
            anchor,
            color: WHITE,
        }
    }
}

/// One procedurally drawn explosion frame: a colored disc with a white core
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackFrame {
    pub size: f32,
    pub color: Rgb,
    pub outer_radius: f32,
    pub inner_radius: f32,
}

/// Explosion artwork: loaded sprite frames, or concentric-circle stand-ins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExplosionArt {
    Sprites(Vec<String>),
    Fallback(Vec<FallbackFrame>),
}

impl Default for ExplosionArt {
    fn default() -> Self {
        Self::Fallback(fallback_frames())
    }
}

impl ExplosionArt {
    /// Use the named sprite frames, or the fallback when none are available
    pub fn from_sprites(names: Vec<String>) -> Self {
        if names.is_empty() {
            log::warn!("No explosion sprites found, using fallback frames");
            Self::default()
        } else {
            Self::Sprites(names)
        }
    }

    /// Always at least one
    pub fn frame_count(&self) -> usize {
        match self {
            ExplosionArt::Sprites(names) => names.len().max(1),
            ExplosionArt::Fallback(frames) => frames.len().max(1),
        }
    }

    /// Commands drawing `frame` centered on `center`
    pub fn frame_commands(&self, frame: usize, center: Vec2) -> Vec<DrawCommand> {
        match self {
            ExplosionArt::Sprites(names) => names
                .get(frame)
                .map(|name| {
                    vec![DrawCommand::CenteredSprite {
                        name: name.clone(),
                        center,
                    }]
                })
                .unwrap_or_default(),
            ExplosionArt::Fallback(frames) => frames
                .get(frame)
                .map(|f| {
                    vec![
                        DrawCommand::Circle {
                            center,
                            radius: f.outer_radius,
                            color: f.color,
                        },
                        DrawCommand::Circle {
                            center,
                            radius: f.inner_radius,
                            color: WHITE,
                        },
                    ]
                })
                .unwrap_or_default(),
        }
    }
}

/// Five 60px frames fading from red through yellow to grey, shrinking
pub fn fallback_frames() -> Vec<FallbackFrame> {
    const COLORS: [Rgb; 5] = [
        [255, 100, 100],
        [255, 150, 0],
        [255, 200, 0],
        [255, 255, 100],
        [200, 200, 200],
    ];
    COLORS
        .iter()
        .enumerate()
        .map(|(i, &color)| FallbackFrame {
            size: 60.0,
            color,
            outer_radius: 30.0 - i as f32 * 3.0,
            inner_radius: 20.0 - i as f32 * 2.0,
        })
        .collect()
}

/// Build the draw list for one frame
pub fn build(snapshot: &Snapshot, art: &ExplosionArt) -> Vec<DrawCommand> {
    let field = snapshot.field_size;
    let mid_x = field.x / 2.0;
    let mut commands = Vec::with_capacity(8 + snapshot.hazards.len());

    if snapshot.phase == GamePhase::Playing {
        commands.push(DrawCommand::sprite(sprites::BACKGROUND, Vec2::ZERO));
        commands.push(DrawCommand::sprite(sprites::CLOUDS, Vec2::ZERO));
        commands.push(DrawCommand::text(
            TITLE,
            Font::Title,
            Anchor::TopCenter(Vec2::new(mid_x, 10.0)),
        ));
        commands.push(DrawCommand::sprite(sprites::CRAFT, snapshot.craft.pos));
        commands.push(DrawCommand::text(
            format!("SCORE: {}", snapshot.score),
            Font::Score,
            Anchor::Center(Vec2::new(mid_x, 50.0)),
        ));
        for hazard in &snapshot.hazards {
            commands.push(DrawCommand::sprite(sprites::HAZARD, hazard.bbox.pos));
        }
        return commands;
    }

    commands.push(DrawCommand::Clear { color: BLACK });

    if let Some(explosion) = snapshot.explosion {
        commands.extend(art.frame_commands(explosion.frame, explosion.pos));
    }

    match snapshot.phase {
        GamePhase::Welcome => {
            commands.push(DrawCommand::text(
                TITLE,
                Font::Title,
                Anchor::Center(Vec2::new(mid_x, 50.0)),
            ));
            commands.push(DrawCommand::text(
                "Press Space to fly",
                Font::Title,
                Anchor::Center(Vec2::new(mid_x, 250.0)),
            ));
            commands.push(DrawCommand::text(
                "Press Enter to Start",
                Font::Title,
                Anchor::Center(Vec2::new(mid_x, field.y / 2.0 + 50.0)),
            ));
        }
        GamePhase::GameOver => {
            commands.push(DrawCommand::text(
                "GAME OVER",
                Font::Title,
                Anchor::Center(Vec2::new(mid_x, 50.0)),
            ));
            commands.push(DrawCommand::text(
                format!("SCORE: {}", snapshot.score),
                Font::Score,
                Anchor::Center(Vec2::new(mid_x, field.y / 2.0)),
            ));
            commands.push(DrawCommand::text(
                "Press Enter to Restart",
                Font::Title,
                Anchor::Center(Vec2::new(mid_x, field.y / 2.0 + 50.0)),
            ));
        }
        GamePhase::Exploding | GamePhase::Playing => {}
    }

    commands
}
