pub mod ballsim_vis2d;
pub mod decoration;
pub mod hud;
