use std::collections::BTreeSet;

use naga::front::wgsl;
use naga::valid::{Capabilities, ValidationFlags, Validator};
use naga::{AddressSpace, Binding, ShaderStage};

const BOOK_SRC: &str = include_str!("../shaders/book.wgsl");
const SPARKLES_SRC: &str = include_str!("../shaders/sparkles.wgsl");

#[test]
fn book_shader_validates() {
    let module = parse_and_validate(BOOK_SRC, "book");
    let vertex = entry_point(&module, ShaderStage::Vertex, "vs_book", "book");
    entry_point(&module, ShaderStage::Fragment, "fs_book", "book");
    assert_eq!(input_locations(vertex, &module), [0, 1, 2].into_iter().collect());
    // view_proj, model, light_dir, ambient
    assert_eq!(uniform_sizes(&module), vec![((0, 0), 160)]);
}

#[test]
fn sparkle_shader_validates() {
    let module = parse_and_validate(SPARKLES_SRC, "sparkles");
    let vertex = entry_point(&module, ShaderStage::Vertex, "vs_sparkle", "sparkles");
    entry_point(&module, ShaderStage::Fragment, "fs_sparkle", "sparkles");
    assert_eq!(input_locations(vertex, &module), [0, 1, 2].into_iter().collect());
    // view, proj, resolution, current_time, point_scale
    assert_eq!(uniform_sizes(&module), vec![((0, 0), 144)]);
}

#[test]
fn sparkle_shader_matches_host_model() {
    for (name, value) in [
        ("AGE_RATE", fx_core::AGE_RATE),
        ("FADE_IN", fx_core::FADE_IN),
        ("DRIFT_RANGE", fx_core::DRIFT_RANGE),
        ("UNUSED_OFFSET", fx_core::UNUSED_OFFSET),
    ] {
        let decl = format!("const {}: f32 = {:?};", name, value);
        assert!(SPARKLES_SRC.contains(&decl), "missing `{decl}`");
    }
    for seed in ["10.0", "20.0", "30.0", "40.0"] {
        assert!(
            SPARKLES_SRC.contains(&format!("hash01(spawn_time + {seed})")),
            "seed offset {seed} missing"
        );
    }
}

fn parse_and_validate(source: &str, label: &str) -> naga::Module {
    let module = wgsl::parse_str(source).unwrap_or_else(|err| {
        panic!("{label} WGSL parse failed: {err}");
    });
    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .unwrap_or_else(|err| {
            panic!("{label} WGSL validation failed: {err:?}");
        });
    module
}

fn entry_point<'a>(
    module: &'a naga::Module,
    stage: ShaderStage,
    name: &str,
    label: &str,
) -> &'a naga::EntryPoint {
    module
        .entry_points
        .iter()
        .find(|entry| entry.stage == stage && entry.name == name)
        .unwrap_or_else(|| panic!("{label} missing entry point {stage:?}:{name}"))
}

fn input_locations(entry: &naga::EntryPoint, module: &naga::Module) -> BTreeSet<u32> {
    let mut locations = BTreeSet::new();
    for argument in &entry.function.arguments {
        collect_locations(module, argument.ty, argument.binding.as_ref(), &mut locations);
    }
    locations
}

fn collect_locations(
    module: &naga::Module,
    ty: naga::Handle<naga::Type>,
    binding: Option<&Binding>,
    locations: &mut BTreeSet<u32>,
) {
    match binding {
        Some(Binding::Location { location, .. }) => {
            locations.insert(*location);
            return;
        }
        Some(Binding::BuiltIn(_)) => return,
        None => {}
    }
    let naga::TypeInner::Struct { members, .. } = &module.types[ty].inner else {
        return;
    };
    for member in members {
        collect_locations(module, member.ty, member.binding.as_ref(), locations);
    }
}

fn uniform_sizes(module: &naga::Module) -> Vec<((u32, u32), u32)> {
    module
        .global_variables
        .iter()
        .filter(|(_, global)| global.space == AddressSpace::Uniform)
        .filter_map(|(_, global)| {
            let binding = global.binding.as_ref()?;
            let size = module.types[global.ty].inner.size(module.to_ctx());
            Some(((binding.group, binding.binding), size))
        })
        .collect()
}
