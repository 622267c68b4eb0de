use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mapcoder::geo::Point;
use mapcoder::query::select_local;
use mapcoder::resolver::{find_alias, resolve_with_context};
use mapcoder::service::EncodeRequest;
use mapcoder::{Mapcode, MapcodeService, TableCodec, Territory};

fn territory(code: &str) -> Territory {
    Territory::from_code(code).unwrap()
}

/// A synthetic candidate list alternating between a few territories.
fn candidates(n: usize) -> Vec<Mapcode> {
    let territories = [territory("NLD"), territory("BEL"), territory("LUX"), Territory::AAA];
    (0..n)
        .map(|i| {
            let code = format!("{}.{}", "X".repeat(2 + i % 4), "Y".repeat(2 + i % 3));
            Mapcode::new(code, "", territories[i % territories.len()])
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    // Build the catalog index outside the measurement
    let _ = Territory::from_code("AAA");

    c.bench_function("resolve_code", |b| {
        b.iter(|| black_box(resolve_with_context(black_box("NLD"), None).unwrap()));
    });

    c.bench_function("resolve_with_context", |b| {
        b.iter(|| black_box(resolve_with_context(black_box("IN"), Some(black_box("US"))).unwrap()));
    });

    c.bench_function("resolve_full_name", |b| {
        b.iter(|| black_box(resolve_with_context(black_box("New South Wales"), None).unwrap()));
    });

    c.bench_function("find_alias_miss", |b| {
        b.iter(|| black_box(find_alias(black_box("nowhere_at_all"))));
    });
}

fn bench_select_local(c: &mut Criterion) {
    let short = candidates(8);
    let long = candidates(200);

    c.bench_function("select_local_8", |b| {
        b.iter(|| black_box(select_local(black_box(&short))));
    });

    c.bench_function("select_local_200", |b| {
        b.iter(|| black_box(select_local(black_box(&long))));
    });
}

fn bench_encode(c: &mut Criterion) {
    let point = Point::new(50.141706, 6.135864);
    let codec = candidates(12)
        .into_iter()
        .fold(TableCodec::new(), |codec, mapcode| {
            codec.with_mapcode(point, mapcode, None)
        });
    let service = MapcodeService::new(codec);
    let request = EncodeRequest {
        include: Some("offset,rectangle".to_string()),
        ..EncodeRequest::new("50.141706,6.135864")
    };

    c.bench_function("encode_all_sections", |b| {
        b.iter(|| black_box(service.encode(black_box(&request)).unwrap()));
    });
}

criterion_group!(benches, bench_resolve, bench_select_local, bench_encode);
criterion_main!(benches);
