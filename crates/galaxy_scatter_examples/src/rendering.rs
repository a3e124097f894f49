//! Minimal software renderer for galaxy point clouds.
//!
//! Points are projected orthographically onto the plane facing a [`CameraFrame`]
//! and splatted into an RGB image. Each group maps its per-point hue onto a
//! two-color gradient.
use std::collections::HashMap;
use std::path::Path;

use galaxy_scatter::prelude::*;
use glam::{Vec2, Vec3};
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a console subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Hue gradient for one point group.
#[derive(Debug, Clone, Copy)]
pub struct GroupStyle {
    /// Color at hue 0.
    pub low: [u8; 3],
    /// Color at hue 1.
    pub high: [u8; 3],
    /// Square splat radius in pixels (0 = single pixel).
    pub radius: u32,
}

impl GroupStyle {
    pub fn color_for(&self, hue: f32) -> [u8; 3] {
        let t = hue.clamp(0.0, 1.0);
        let mut out = [0u8; 3];
        for (i, c) in out.iter_mut().enumerate() {
            let lo = self.low[i] as f32;
            let hi = self.high[i] as f32;
            *c = (lo + (hi - lo) * t).round() as u8;
        }
        out
    }
}

/// Output settings for [`render_galaxy_to_png`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image size in pixels (width, height).
    pub image_size: (u32, u32),
    /// Half-width of the visible world region along the image's shorter side.
    pub extent: f32,
    pub background: [u8; 3],
    styles: HashMap<GroupKind, GroupStyle>,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), extent: f32) -> Self {
        let mut styles = HashMap::new();
        styles.insert(
            GroupKind::Leading,
            GroupStyle {
                low: [90, 120, 255],
                high: [235, 235, 255],
                radius: 0,
            },
        );
        styles.insert(
            GroupKind::Trailing,
            GroupStyle {
                low: [150, 90, 230],
                high: [240, 230, 255],
                radius: 0,
            },
        );
        styles.insert(
            GroupKind::Core,
            GroupStyle {
                low: [255, 170, 60],
                high: [255, 245, 210],
                radius: 0,
            },
        );
        Self {
            image_size,
            extent,
            background: [0, 0, 0],
            styles,
        }
    }

    /// Picks an extent that fits every star of `galaxy` with a small margin.
    pub fn fitting(image_size: (u32, u32), galaxy: &Galaxy) -> Self {
        let max_len = galaxy
            .groups()
            .flat_map(|(_, g)| g.points().iter())
            .map(|p| p.length())
            .filter(|l| l.is_finite())
            .fold(0.0f32, f32::max);
        Self::new(image_size, (max_len * 1.05).max(1.0))
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn set_group_style(&mut self, kind: GroupKind, style: GroupStyle) {
        self.styles.insert(kind, style);
    }

    pub fn style(&self, kind: GroupKind) -> Option<&GroupStyle> {
        self.styles.get(&kind)
    }
}

/// Orthographic view basis for an eye looking at the origin with +z up.
fn view_basis(frame: &CameraFrame) -> (Vec3, Vec3) {
    let forward = frame.look_direction();
    let right = forward.cross(Vec3::Z).try_normalize().unwrap_or(Vec3::X);
    let up = right.cross(forward).normalize_or_zero();
    (right, up)
}

fn project(point: Vec3, right: Vec3, up: Vec3) -> Vec2 {
    Vec2::new(point.dot(right), point.dot(up))
}

/// Renders the galaxy as seen from `frame` into an image.
pub fn render_galaxy(galaxy: &Galaxy, frame: &CameraFrame, rc: &RenderConfig) -> RgbImage {
    let (w, h) = rc.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(rc.background));
    let (right, up) = view_basis(frame);

    let half_px = w.min(h) as f32 * 0.5;
    let scale = half_px / rc.extent;
    let center = Vec2::new(w as f32 * 0.5, h as f32 * 0.5);

    // Core last so it sits on top of the arms.
    for (kind, group) in galaxy.groups() {
        let Some(style) = rc.style(kind) else {
            continue;
        };
        for (point, hue) in group.iter() {
            let uv = project(point, right, up);
            let px = center.x + uv.x * scale;
            let py = center.y - uv.y * scale;
            if !px.is_finite() || !py.is_finite() {
                continue;
            }
            splat(&mut img, px, py, style.radius, style.color_for(hue));
        }
    }

    img
}

fn splat(img: &mut RgbImage, px: f32, py: f32, radius: u32, color: [u8; 3]) {
    let (w, h) = img.dimensions();
    let cx = px.floor() as i64;
    let cy = py.floor() as i64;
    let r = radius as i64;
    for y in (cy - r)..=(cy + r) {
        for x in (cx - r)..=(cx + r) {
            if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
                continue;
            }
            img.put_pixel(x as u32, y as u32, Rgb(color));
        }
    }
}

/// Renders the galaxy from `frame` and writes a PNG to `path`.
pub fn render_galaxy_to_png(
    galaxy: &Galaxy,
    frame: &CameraFrame,
    rc: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    render_galaxy(galaxy, frame, rc).save(path)?;
    info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_down_view_maps_x_to_the_right() {
        let frame = CameraFrame::new(0.0, -0.001, 10.0);
        let (right, _) = view_basis(&frame);
        assert!(right.x > 0.99);
    }

    #[test]
    fn style_interpolates_between_endpoints() {
        let style = GroupStyle {
            low: [0, 0, 0],
            high: [200, 100, 50],
            radius: 0,
        };
        assert_eq!(style.color_for(0.0), [0, 0, 0]);
        assert_eq!(style.color_for(1.0), [200, 100, 50]);
        assert_eq!(style.color_for(0.5), [100, 50, 25]);
    }

    #[test]
    fn origin_star_lands_in_the_image_center() {
        let galaxy = Galaxy {
            core: PointGroup::try_new(vec![Vec3::ZERO], vec![1.0]).expect("valid"),
            ..Default::default()
        };
        let rc = RenderConfig::new((11, 11), 10.0);
        let img = render_galaxy(&galaxy, &CameraFrame::ISOMETRIC, &rc);
        assert_eq!(img.get_pixel(5, 5), &Rgb([255, 245, 210]));
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
    }
}
