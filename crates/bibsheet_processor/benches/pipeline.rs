use bibsheet_core::{FormattingConfig, InputFormat, StyleId};
use bibsheet_processor::normalize::normalize;
use bibsheet_processor::parser::{BibtexParser, FormatParser};
use bibsheet_processor::{formatter, Processor};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fs;
use std::path::PathBuf;

fn bench_pipeline(c: &mut Criterion) {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let root_dir = manifest_dir.parent().unwrap().parent().unwrap();

    let bib_path = root_dir.join("tests/fixtures/sample.bib");
    let sample = fs::read_to_string(&bib_path).expect("failed to read sample.bib");

    // Repeat the sample library to a realistic size.
    let library: String = (0..50)
        .map(|i| sample.replace("smith2023machine", &format!("smith2023machine{i}")))
        .collect::<Vec<_>>()
        .join("\n");

    c.bench_function("Process BibTeX (APA, 200 entries)", |b| {
        let processor = Processor::new(FormattingConfig {
            style: StyleId::Apa,
            ..Default::default()
        });
        b.iter(|| {
            processor
                .process_str(black_box(&library), InputFormat::Bibtex)
                .unwrap();
        })
    });

    let references = normalize(BibtexParser.parse(&sample).entries).references;
    for style in [StyleId::Apa, StyleId::Ieee, StyleId::Vancouver] {
        let formatter = formatter(style);
        c.bench_function(&format!("Format single reference ({style})"), |b| {
            b.iter(|| formatter.format(black_box(&references[0])))
        });
    }
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
