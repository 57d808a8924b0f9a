use clipspace_renderer::{
    Error, Projection3d, Renderer, Shape2d, Shape3d, Transform2d, Transform3d, F_2D, F_3D,
    F_3D_COLORS,
};

fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    run().unwrap()
}

fn run() -> Result<(), Error> {
    let mut renderer = Renderer::create("canvas")?.clear_color(0x202020);

    let mut f_2d = Shape2d::new(renderer.gl(), &F_2D)?;
    f_2d.transform = Transform2d {
        translation: (100.0, 150.0),
        ..Default::default()
    };
    f_2d.color = [0.62, 0.29, 0.66, 1.0];

    let mut f_3d = Shape3d::new(renderer.gl(), &F_3D, &F_3D_COLORS)?;
    f_3d.transform = Transform3d {
        translation: (45.0, 150.0, 126.0),
        ..Default::default()
    };
    f_3d.projection = Projection3d::Pixel { depth: 400.0, fudge_factor: 1.0 };

    renderer.begin_frame();
    renderer.render(&f_2d);
    renderer.render(&f_3d);

    Ok(())
}
