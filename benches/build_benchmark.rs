use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cosmo_scenes::{
    ActionParams, AssetLoader, ComponentFactory, Sequencer, StyleRegistry, TemplateLoader,
};

fn bench_build(c: &mut Criterion) {
    let registry = StyleRegistry::new();
    TemplateLoader::load_template(&registry, "cosmic_dawn");
    let factory = ComponentFactory::new(&registry, AssetLoader::new("assets"));

    c.bench_function("build_em_bubble", |b| {
        b.iter(|| factory.build(black_box("bubble"), black_box("em"), None).unwrap())
    });

    c.bench_function("build_gallery", |b| b.iter(|| factory.build_gallery().unwrap()));
}

fn bench_sequence(c: &mut Criterion) {
    let registry = StyleRegistry::new();
    let factory = ComponentFactory::new(&registry, AssetLoader::new("assets"));
    let component = factory.build("bubble", "energy_discussion", None).unwrap();
    let params = ActionParams::default();

    c.bench_function("sequence_energy_bubble", |b| {
        b.iter(|| {
            let mut component = component.clone();
            for action in ["fade_in_bulk", "fail_creation", "create", "expand"] {
                Sequencer::run(&mut component, black_box(action), &params).unwrap();
            }
            component
        })
    });
}

criterion_group!(benches, bench_build, bench_sequence);
criterion_main!(benches);
