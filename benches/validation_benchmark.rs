use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use libopc::{CompressionOption, Part, normalize_content_type, validate_part_name};
use std::hint::black_box;

/// Generate a part name with the given number of segments
fn generate_part_name(segments: usize) -> String {
    (0..segments)
        .map(|i| format!("/segment{}%E2%82%AC", i))
        .collect::<String>()
        + ".xml"
}

fn bench_validate_part_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_part_name");

    for segments in [1, 8, 64] {
        let name = generate_part_name(segments);
        group.bench_with_input(BenchmarkId::from_parameter(segments), &name, |b, name| {
            b.iter(|| validate_part_name(black_box(name)))
        });
    }

    group.finish();
}

fn bench_normalize_content_type(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_content_type");

    let inputs = [
        ("plain", "application/xml".to_string()),
        (
            "office",
            "Application/VND.OpenXMLFormats-OfficeDocument.WordprocessingML.Document.Main+XML"
                .to_string(),
        ),
        (
            "parameters",
            (0..16).fold("text/html".to_string(), |acc, i| format!("{};p{}=v{}", acc, i, i)),
        ),
    ];

    for (label, raw) in &inputs {
        group.bench_with_input(BenchmarkId::from_parameter(label), raw, |b, raw| {
            b.iter(|| normalize_content_type(black_box(raw)))
        });
    }

    group.finish();
}

fn bench_add_relationship(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_relationship");

    for count in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut part =
                    Part::new("/word/document.xml", "application/xml", CompressionOption::Normal)
                        .unwrap();
                for i in 0..count {
                    part.add_relationship(format!("rId{}", i), "type", "target.xml")
                        .unwrap();
                }
                part
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_validate_part_name,
    bench_normalize_content_type,
    bench_add_relationship
);
criterion_main!(benches);
