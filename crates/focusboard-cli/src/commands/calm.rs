use focusboard_core::calm;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", calm::guide().render());
    Ok(())
}
