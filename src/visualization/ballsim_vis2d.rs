use bevy::prelude::*;
use bevy::sprite::{Anchor, MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;
use bevy::math::primitives::Circle;

use crate::controls::input::{InputEvent, InputHandler};
use crate::controls::slider::Rect;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{BodyColor, BodyId, NVec2};
use crate::visualization::decoration::Decorations;
use crate::visualization::hud::status_line;

/// Window size in logical pixels; physics coordinates are window pixels, y down
const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;

#[derive(Component)]
struct BodyMarker(BodyId);

#[derive(Component)]
struct SliderHandle(usize);

#[derive(Component)]
struct SliderValueText(usize);

#[derive(Component)]
struct StatusText;

#[derive(Resource)]
struct BodyMesh(Handle<Mesh>);

#[derive(Resource, Default)]
struct InputState(InputHandler);

pub fn run_2d(scenario: Scenario) {
    tracing::info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.world.len());

    let decorations = Decorations::new(scenario.decorations);
    let tick_rate = scenario.parameters.tick_rate;

    App::new()
        .insert_resource(scenario)
        .insert_resource(decorations)
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(tick_rate))
        .init_resource::<InputState>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ball Collision Simulation".into(),
                resolution: (WIDTH, HEIGHT).into(),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, (setup_camera_system, setup_panel_system))
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(
            Update,
            (
                input_system,
                sync_bodies_system,
                draw_system,
                sync_panel_system,
            )
                .chain(),
        )
        .run();
}

/// Window pixels (y down, origin top-left) -> world (y up, origin center)
fn to_world(p: &NVec2) -> Vec2 {
    Vec2::new(p.x as f32 - WIDTH / 2.0, HEIGHT / 2.0 - p.y as f32)
}

fn to_screen(w: Vec2) -> NVec2 {
    NVec2::new((w.x + WIDTH / 2.0) as f64, (HEIGHT / 2.0 - w.y) as f64)
}

fn rect_center(r: &Rect) -> Vec2 {
    to_world(&r.center())
}

fn rect_size(r: &Rect) -> Vec2 {
    Vec2::new(r.w as f32, r.h as f32)
}

fn color_of(c: BodyColor) -> Color {
    let [r, g, b] = c.0;
    Color::srgb_u8(r, g, b)
}

fn trail_color(c: BodyColor) -> Color {
    let [r, g, b] = c.0;
    Color::srgba_u8(r, g, b, 100)
}

fn setup_camera_system(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.spawn(Camera2dBundle::default());

    // Unit circle shared by every body, scaled per body through its transform
    commands.insert_resource(BodyMesh(meshes.add(Circle::new(1.0))));
}

fn setup_panel_system(mut commands: Commands, scenario: Res<Scenario>) {
    let controls = &scenario.controls;
    let text_style = TextStyle {
        font_size: 18.0,
        color: Color::WHITE,
        ..default()
    };

    for (i, slider) in controls.sliders.iter().enumerate() {
        // Track
        commands.spawn(SpriteBundle {
            sprite: Sprite {
                color: Color::WHITE,
                custom_size: Some(rect_size(&slider.track)),
                ..default()
            },
            transform: Transform::from_translation(rect_center(&slider.track).extend(0.0)),
            ..default()
        });

        // Handle, repositioned every frame
        let handle = slider.handle();
        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: Color::srgb(1.0, 0.0, 0.0),
                    custom_size: Some(rect_size(&handle)),
                    ..default()
                },
                transform: Transform::from_translation(rect_center(&handle).extend(1.0)),
                ..default()
            },
            SliderHandle(i),
        ));

        // Label and value
        let y = slider.track.y;
        commands.spawn(Text2dBundle {
            text: Text::from_section(slider.label, text_style.clone()),
            text_anchor: Anchor::TopLeft,
            transform: Transform::from_translation(to_world(&NVec2::new(220.0, y)).extend(1.0)),
            ..default()
        });
        commands.spawn((
            Text2dBundle {
                text: Text::from_section(format!("{:.2}", slider.value()), text_style.clone()),
                text_anchor: Anchor::TopLeft,
                transform: Transform::from_translation(to_world(&NVec2::new(320.0, y)).extend(1.0)),
                ..default()
            },
            SliderValueText(i),
        ));
    }

    for (swatch, color) in controls.swatches.iter().zip(controls.palette.iter()) {
        commands.spawn(SpriteBundle {
            sprite: Sprite {
                color: color_of(*color),
                custom_size: Some(rect_size(swatch)),
                ..default()
            },
            transform: Transform::from_translation(rect_center(swatch).extend(0.0)),
            ..default()
        });
    }

    let button = controls.add_button;
    commands.spawn(SpriteBundle {
        sprite: Sprite {
            color: Color::WHITE,
            custom_size: Some(rect_size(&button)),
            ..default()
        },
        transform: Transform::from_translation(rect_center(&button).extend(0.0)),
        ..default()
    });
    commands.spawn(Text2dBundle {
        text: Text::from_section(
            "Add Ball",
            TextStyle {
                color: Color::BLACK,
                ..text_style.clone()
            },
        ),
        transform: Transform::from_translation(rect_center(&button).extend(1.0)),
        ..default()
    });

    commands.spawn((
        Text2dBundle {
            text: Text::from_section("", text_style),
            text_anchor: Anchor::BottomLeft,
            transform: Transform::from_translation(to_world(&NVec2::new(10.0, HEIGHT as f64 - 10.0)).extend(1.0)),
            ..default()
        },
        StatusText,
    ));
}

/// Fixed-rate tick: physics first, then the cosmetic bookkeeping it drives
fn physics_step_system(mut scenario: ResMut<Scenario>, mut decorations: ResMut<Decorations>) {
    let report = scenario.step();
    decorations.on_step(scenario.world.bodies(), &report);
}

/// Mouse and keyboard -> `InputEvent` -> `Request`, applied between ticks
fn input_system(
    mut scenario: ResMut<Scenario>,
    mut input: ResMut<InputState>,
    mut decorations: ResMut<Decorations>,
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
) {
    let mut events = Vec::new();

    let pointer = match (windows.get_single(), cameras.get_single()) {
        (Ok(window), Ok((camera, cam_transform))) => window
            .cursor_position()
            .and_then(|cursor| camera.viewport_to_world_2d(cam_transform, cursor))
            .map(to_screen),
        _ => None,
    };

    if let Some(p) = pointer {
        events.push(InputEvent::PointerMove(p));
        if mouse.just_pressed(MouseButton::Left) {
            events.push(InputEvent::PointerDown(p));
        }
    }
    if mouse.just_released(MouseButton::Left) {
        events.push(InputEvent::PointerUp);
    }

    for (key, index) in [(KeyCode::Digit1, 0), (KeyCode::Digit2, 1), (KeyCode::Digit3, 2)] {
        if keys.just_pressed(key) {
            events.push(InputEvent::SelectColor(index));
        }
    }
    if keys.just_pressed(KeyCode::Space) {
        events.push(InputEvent::SpawnPressed);
    }
    if keys.just_pressed(KeyCode::KeyR) || keys.just_pressed(KeyCode::Backspace) {
        events.push(InputEvent::Reset);
    }

    for event in events {
        if let Some(request) = input.0.handle(event, &mut scenario.controls) {
            scenario.apply(request);
        }
    }
    if scenario.world.is_empty() {
        decorations.clear();
    }
}

/// Keep one mesh entity per body: spawn new, despawn removed, move the rest
fn sync_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    decorations: Res<Decorations>,
    body_mesh: Res<BodyMesh>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &BodyMarker, &mut Transform, &Handle<ColorMaterial>)>,
) {
    let bodies = scenario.world.bodies();
    let mut drawn = Vec::with_capacity(bodies.len());

    for (entity, BodyMarker(id), mut transform, mat_handle) in &mut query {
        match scenario.world.get(*id) {
            Some(b) => {
                transform.translation = to_world(&b.position).extend(2.0);
                if let Some(mat) = materials.get_mut(mat_handle) {
                    mat.color = color_of(decorations.display_color(b));
                }
                drawn.push(*id);
            }
            None => commands.entity(entity).despawn(),
        }
    }

    for b in bodies.iter().filter(|b| !drawn.contains(&b.id())) {
        let r = b.radius() as f32;
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(body_mesh.0.clone()),
                material: materials.add(ColorMaterial::from(color_of(b.color))),
                transform: Transform::from_translation(to_world(&b.position).extend(2.0))
                    .with_scale(Vec3::new(r, r, 1.0)),
                ..default()
            },
            BodyMarker(b.id()),
        ));
    }
}

/// Container ring, trails and the selected-swatch outline
fn draw_system(mut gizmos: Gizmos, scenario: Res<Scenario>, decorations: Res<Decorations>) {
    let container = scenario.world.container;
    gizmos.circle_2d(to_world(&container.center), container.radius as f32, Color::WHITE);

    if decorations.enabled {
        for b in scenario.world.bodies() {
            if let Some(deco) = decorations.get(b.id()) {
                if deco.trail_len() > 1 {
                    gizmos.linestrip_2d(deco.trail().map(to_world), trail_color(b.color));
                }
            }
        }
    }

    let controls = &scenario.controls;
    if let Some(swatch) = controls.swatches.get(controls.selected) {
        outline(&mut gizmos, swatch, Color::WHITE);
    }
}

fn outline(gizmos: &mut Gizmos, r: &Rect, color: Color) {
    let tl = to_world(&NVec2::new(r.x, r.y));
    let br = to_world(&NVec2::new(r.x + r.w, r.y + r.h));
    let tr = Vec2::new(br.x, tl.y);
    let bl = Vec2::new(tl.x, br.y);
    gizmos.linestrip_2d([tl, tr, br, bl, tl], color);
}

fn sync_panel_system(
    scenario: Res<Scenario>,
    mut handles: Query<(&mut Transform, &SliderHandle)>,
    mut texts: Query<(&mut Text, Option<&SliderValueText>, Option<&StatusText>)>,
) {
    let controls = &scenario.controls;

    for (mut transform, SliderHandle(i)) in &mut handles {
        if let Some(slider) = controls.sliders.get(*i) {
            transform.translation = rect_center(&slider.handle()).extend(1.0);
        }
    }

    for (mut text, value, status) in &mut texts {
        if let Some(SliderValueText(i)) = value {
            if let Some(slider) = controls.sliders.get(*i) {
                text.sections[0].value = format!("{:.2}", slider.value());
            }
        } else if status.is_some() {
            let world = &scenario.world;
            text.sections[0].value = status_line(world.bodies(), world.total_kinetic_energy(), world.tick);
        }
    }
}
