//! Landing page at `/` with usage notes for the console.

use leptos::prelude::*;

#[component]
pub fn InstructionPage() -> impl IntoView {
    view! {
        <div class="page instruction">
            <h1 class="page__title">"Инструкция"</h1>
            <ol class="instruction__steps">
                <li>
                    "Откройте раздел «Кампании» и создайте кампанию. Название не может быть пустым."
                </li>
                <li>
                    "Перейдите в кампанию и добавьте подмены. Ключ может содержать только латинские буквы, цифры, - и _."
                </li>
                <li>
                    "Для подмены типа «Текст» введите значение вручную. Для типа «Изображение» загрузите файл: ссылка на него подставится автоматически."
                </li>
                <li>
                    "Добавьте в whitelist домены, на которых кампания должна работать."
                </li>
            </ol>
            <p class="instruction__note">
                "Изменения сохраняются сразу. Ошибки записи показываются во всплывающем окне."
            </p>
        </div>
    }
}
