use clearspeech::domain::StoragePath;

#[test]
fn given_nested_path_when_deriving_cleaned_then_suffix_precedes_extension() {
    let path = StoragePath::from_raw("proj1/raw/a.wav");
    assert_eq!(path.cleaned().as_str(), "proj1/raw/a_cleaned.wav");
}

#[test]
fn given_same_path_when_deriving_twice_then_results_match() {
    let path = StoragePath::from_raw("proj1/raw/a.wav");
    assert_eq!(path.cleaned(), path.cleaned());
}

#[test]
fn given_bare_filename_when_deriving_cleaned_then_suffix_applied_without_directory() {
    let path = StoragePath::from_raw("take.wav");
    assert_eq!(path.cleaned().as_str(), "take_cleaned.wav");
}

#[test]
fn given_filename_without_extension_when_deriving_cleaned_then_suffix_appended() {
    let path = StoragePath::from_raw("proj1/rawfile");
    assert_eq!(path.cleaned().as_str(), "proj1/rawfile_cleaned");
}

#[test]
fn given_filename_with_multiple_dots_when_deriving_cleaned_then_only_final_extension_split() {
    let path = StoragePath::from_raw("p/session.take_01.wav");
    assert_eq!(path.cleaned().as_str(), "p/session.take_01_cleaned.wav");
}

#[test]
fn given_nested_path_when_reading_filename_then_final_segment_returned() {
    let path = StoragePath::from_raw("proj1/1700000000-converted/take_01.wav");
    assert_eq!(path.filename(), "take_01.wav");
}

#[test]
fn given_bare_path_when_reading_filename_then_whole_path_returned() {
    let path = StoragePath::from_raw("take_01.wav");
    assert_eq!(path.filename(), "take_01.wav");
}
