//! アップロードエリアコンポーネント

use call_analyzer_common::UiEvent;
use leptos::prelude::*;
use web_sys::{DragEvent, MouseEvent, SubmitEvent};

use crate::controller::{selected_file, Controller};

#[component]
pub fn UploadArea(controller: Controller) -> impl IntoView {
    let state = controller.view();
    let has_file = move || state.with(|s| s.selected.is_some());

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        controller.dispatch(UiEvent::FileDropped(file.map(selected_file)));
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        controller.dispatch(UiEvent::DragOver);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        controller.dispatch(UiEvent::DragLeave);
    };

    let on_remove = move |ev: MouseEvent| {
        ev.stop_propagation();
        controller.dispatch(UiEvent::RemoveFile);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        controller.dispatch(UiEvent::Submit);
    };

    view! {
        <section id="uploadSection" class="upload-section fade-in">
            <form id="uploadForm" on:submit=on_submit>
                <div
                    id="fileDropZone"
                    class=move || {
                        if state.with(|s| s.drag_over) {
                            "file-drop-zone drag-over"
                        } else {
                            "file-drop-zone"
                        }
                    }
                    on:click=move |_| controller.dispatch(UiEvent::DropZoneClicked)
                    on:drop=on_drop
                    on:dragover=on_dragover
                    on:dragleave=on_dragleave
                >
                    <div class="upload-icon"><i class="fas fa-cloud-upload-alt"></i></div>
                    <p>"Drag & drop your audio file here"</p>
                    <p class="text-muted">"or click to browse (Ctrl+U)"</p>
                    <p class="text-muted">"MP3, WAV, M4A, FLAC, OGG, AAC up to 100MB"</p>
                </div>

                <Show when=has_file>
                    <div id="fileInfo" class="file-info slide-up">
                        <i class="fas fa-file-audio"></i>
                        <div class="file-details">
                            <span id="fileName" class="file-name">
                                {move || state.with(|s| s.file_name())}
                            </span>
                            <span id="fileSize" class="file-size">
                                {move || state.with(|s| s.file_size())}
                            </span>
                        </div>
                        <button type="button" id="removeFile" class="remove-file" on:click=on_remove>
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                </Show>

                <button
                    type="submit"
                    id="analyzeBtn"
                    class="btn btn-primary"
                    disabled=move || !state.with(|s| s.can_submit)
                >
                    <span class="btn-text">
                        {move || if state.with(|s| s.is_processing) { "Analyzing..." } else { "Analyze Call" }}
                    </span>
                    <Show when=move || state.with(|s| s.is_processing)>
                        <span class="btn-loader"></span>
                    </Show>
                </button>
            </form>
        </section>
    }
}
